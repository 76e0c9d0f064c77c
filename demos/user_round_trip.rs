//! Renders a small user profile to JSON and reads it back.
//!
//! Run with `RUST_LOG=debug cargo run --example user_round_trip --features time`.

use jsonable::{
    JsonResult, Jsonable, Object, Readable, Writable, WritableList, extract_timestamp,
    to_epoch_seconds,
};
use log::info;
use time::OffsetDateTime;

#[derive(Debug, PartialEq)]
struct Car {
    make: String,
    year: i64,
}

impl Readable for Car {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(Car {
            make: object.extract("make")?,
            year: object.extract("year")?,
        })
    }
}

impl Writable for Car {
    fn to_object(&self) -> Object {
        Object::new().with("make", &self.make).with("year", self.year)
    }
}

#[derive(Debug)]
struct Profile {
    name: String,
    nickname: Option<String>,
    since: OffsetDateTime,
    cars: Vec<Car>,
}

impl Readable for Profile {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(Profile {
            name: object.extract("name")?,
            nickname: object.extract_optional("nickname")?,
            since: extract_timestamp(object, "since")?,
            cars: Car::list_from(&object.extract::<Vec<Object>>("cars")?)?,
        })
    }
}

impl Writable for Profile {
    fn to_object(&self) -> Object {
        Object::new()
            .with("name", &self.name)
            .with("nickname", &self.nickname)
            .with("since", to_epoch_seconds(self.since))
            .with("cars", self.cars.to_objects())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let profile = Profile {
        name: "Alex".to_string(),
        nickname: None,
        since: OffsetDateTime::now_utc(),
        cars: vec![
            Car {
                make: "Toyota".to_string(),
                year: 2004,
            },
            Car {
                make: "BMW".to_string(),
                year: 2012,
            },
        ],
    };

    let text = profile.to_text(true)?;
    info!("Rendered profile:\n{}", text);

    let back = Profile::from_text(&text)?;
    info!("Read back: {:?}", back);

    assert_eq!(back.name, profile.name);
    assert_eq!(back.nickname, None);
    assert_eq!(back.since.unix_timestamp(), profile.since.unix_timestamp());
    assert_eq!(back.cars, profile.cars);
    assert_eq!(profile.cars[0].reparsed()?, profile.cars[0]);

    Ok(())
}
