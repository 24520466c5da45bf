use crate::models::{ClassGroup, Person};

/// Which students the filtered view exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    /// Students enrolled in the class group, compared without regard to case.
    InClassGroup(ClassGroup),
    /// Students with any name word equal to one of the keywords, ignoring case.
    NameContainsKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            Self::ShowAll => true,
            Self::InClassGroup(class_group) => person.is_in_class_group(class_group),
            Self::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| person.name().contains_word(keyword)),
        }
    }
}
