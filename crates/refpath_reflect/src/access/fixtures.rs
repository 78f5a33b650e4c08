//! Record types shared by the path tests.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::derive::Reflect;

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Phone {
    pub number: String,
    pub kind: String,
}

impl Phone {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u8,
    pub rank: i8,
    pub height: f64,
    pub active: bool,
    pub avatar: Vec<u8>,
    pub phone: Option<Box<Phone>>,
    pub phones: Vec<Phone>,
    pub spouse: Option<Box<Person>>,
    #[reflect(skip)]
    pub notes: String,
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Project {
    pub name: String,
    pub budget: i64,
    pub members: Vec<Option<Box<Person>>>,
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Department {
    pub name: String,
    pub head: Option<Box<Person>>,
    pub projects: Vec<Project>,
    pub codes: BTreeMap<String, Vec<BTreeMap<String, String>>>,
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
pub struct Company {
    pub name: String,
    pub phone: Option<Box<Phone>>,
    pub departments: Vec<Option<Box<Department>>>,
    pub languages: BTreeMap<String, Language>,
    pub offices: BTreeMap<u32, String>,
}

fn language(code: &str, name: &str) -> (String, Language) {
    let language = Language {
        code: code.into(),
        name: name.into(),
    };
    (code.into(), language)
}

/// A company with one department, two projects and two languages.
pub fn company() -> Company {
    let head = Person {
        name: "Ada".into(),
        age: 36,
        phone: Some(Box::new(Phone::new("555-0100"))),
        ..Person::default()
    };
    let department = Department {
        name: "Engineering".into(),
        head: Some(Box::new(head)),
        projects: vec![
            Project {
                name: "Runtime".into(),
                budget: 1200,
                members: Vec::new(),
            },
            Project {
                name: "Compiler".into(),
                budget: 800,
                members: vec![None],
            },
        ],
        codes: BTreeMap::new(),
    };
    Company {
        name: "Analytical Engines".into(),
        phone: Some(Box::new(Phone::new("555-0199"))),
        departments: vec![Some(Box::new(department))],
        languages: [language("en", "English"), language("fr", "French")].into(),
        offices: BTreeMap::from([(1, "London".into())]),
    }
}
