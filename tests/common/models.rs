//! Model types exercising nesting, arrays of objects, tagged variants and custom equality.

use std::collections::BTreeMap;

use jsonable::{
    JsonResult, Object, Readable, Writable, WritableList, extract_timestamp, to_epoch_seconds,
};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub enum UserType {
    Member { id: String },
    Guest { id: String },
}

impl Readable for UserType {
    fn from_object(object: &Object) -> JsonResult<Self> {
        if let Ok(id) = object.extract::<String>("member") {
            return Ok(UserType::Member { id });
        }

        Ok(UserType::Guest {
            id: object.extract("guest")?,
        })
    }
}

impl Writable for UserType {
    fn to_object(&self) -> Object {
        match self {
            UserType::Member { id } => Object::new().with("member", id),
            UserType::Guest { id } => Object::new().with("guest", id),
        }
    }
}

impl PartialEq for UserType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UserType::Member { id: a }, UserType::Member { id: b }) => a == b,
            (UserType::Guest { id: a }, UserType::Guest { id: b }) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Job {
    pub position: String,
    pub start: OffsetDateTime,
}

impl Readable for Job {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(Job {
            position: object.extract("position")?,
            start: extract_timestamp(object, "start")?,
        })
    }
}

impl Writable for Job {
    fn to_object(&self) -> Object {
        Object::new()
            .with("position", &self.position)
            .with("start", to_epoch_seconds(self.start))
    }
}

// Start times survive the wire only to the second.
impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.start.unix_timestamp() == other.start.unix_timestamp()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: i64,
}

impl Car {
    pub fn new(make: &str, model: &str, year: i64) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
        }
    }
}

impl Readable for Car {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(Car {
            make: object.extract("make")?,
            model: object.extract("model")?,
            year: object.extract("year")?,
        })
    }
}

impl Writable for Car {
    fn to_object(&self) -> Object {
        Object::new()
            .with("make", &self.make)
            .with("model", &self.model)
            .with("year", self.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub user_type: UserType,
    pub is_registered: bool,
    pub job: Job,
    pub cars: Vec<Car>,
}

impl Readable for User {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(User {
            name: object.extract("name")?,
            age: object.extract("age")?,
            email: object.extract("email")?,
            user_type: UserType::from_object(&object.extract("type")?)?,
            is_registered: object.extract("is_registered")?,
            job: Job::from_object(&object.extract("job")?)?,
            cars: Car::list_from(&object.extract::<Vec<Object>>("cars")?)?,
        })
    }
}

impl Writable for User {
    fn to_object(&self) -> Object {
        Object::new()
            .with("name", &self.name)
            .with("age", self.age)
            .with("email", &self.email)
            .with("type", self.user_type.to_object())
            .with("is_registered", self.is_registered)
            .with("job", self.job.to_object())
            .with("cars", self.cars.to_objects())
    }
}

/// A writer that embeds a value JSON cannot hold: a map keyed by positions.
pub struct Improper {
    pub user: User,
    pub parking: BTreeMap<(u16, u16), Car>,
}

impl Writable for Improper {
    fn to_object(&self) -> Object {
        let parking: BTreeMap<(u16, u16), Object> = self
            .parking
            .iter()
            .map(|(slot, car)| (*slot, car.to_object()))
            .collect();

        Object::new()
            .with("user", self.user.to_object())
            .with("parking", parking)
    }
}

pub fn alex(start: OffsetDateTime) -> User {
    User {
        name: "Alex".to_string(),
        age: 25,
        email: "alex@example.com".to_string(),
        user_type: UserType::Member {
            id: "1234567890".to_string(),
        },
        is_registered: true,
        job: Job {
            position: "Founder".to_string(),
            start,
        },
        cars: vec![
            Car::new("Toyota", "Rav4", 2004),
            Car::new("BMW", "x3", 2012),
        ],
    }
}
