use proptest::{collection::vec, prelude::*};

use crate::prelude::*;

/// A catalog entry, ordered and looked up by its course number.
///
/// Prerequisites reference other courses by number; the references are not
/// validated on insertion, dangling ones are simply reported as such when a
/// course is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub number: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Keyed for Course {
    type Key = String;

    fn key(&self) -> &String {
        &self.number
    }
}

impl Arbitrary for Course {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[A-Z]{2,4}[0-9]{3}",
            "[A-Za-z ]{1,24}",
            vec("[A-Z]{2,4}[0-9]{3}", 0..3),
        )
            .prop_map(|(number, title, prerequisites)| Self {
                number,
                title,
                prerequisites,
            })
            .boxed()
    }
}
