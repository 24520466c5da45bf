use classbook::models::{Assignment, ClassGroup, Level, Name, Person, Phone};
use classbook::store::{Model, PersonPredicate, RecordBook, StoreError, VersionError, VersionManager};
use im::OrdSet;
use speculate2::speculate;

fn class(name: &str) -> ClassGroup {
    ClassGroup::parse(name).expect("valid class")
}

fn student(name: &str, phone: &str, level: &str, classes: &[&str]) -> Person {
    Person::new(
        Name::parse(name).expect("valid name"),
        Phone::parse(phone).expect("valid phone"),
        Level::parse(level).expect("valid level"),
        classes.iter().map(|c| class(c)).collect(),
        OrdSet::new(),
    )
}

speculate! {
    describe "person identity" {
        it "separates same-identity from full equality" {
            let a = student("Alice", "911", "Sec 3", &["Math"]);
            let b = student("Alice", "911", "Sec 4", &["Art"]);

            assert!(a.is_same_person(&b));
            assert_ne!(a, b);
        }

        it "does not treat a different phone as the same student" {
            let a = student("Alice", "911", "Sec 3", &[]);
            let b = student("Alice", "922", "Sec 3", &[]);
            assert!(!a.is_same_person(&b));
        }
    }

    describe "assignment marking" {
        before {
            let hw1 = Assignment::parse("HW1", class("Math")).expect("valid assignment");
        }

        it "is idempotent in both directions" {
            assert_eq!(hw1.marked().marked(), hw1.marked());
            assert!(hw1.marked().marked().is_marked());
            assert!(!hw1.unmarked().unmarked().is_marked());
        }

        it "restores an unmarked element with the same name" {
            let restored = hw1.marked().unmarked();
            assert_eq!(restored, hw1);
            assert_eq!(restored.name(), "hw1");
            assert!(!restored.is_marked());
        }
    }

    describe "model" {
        before {
            let mut model = Model::new(
                RecordBook::from_persons(vec![
                    student("Alice", "911", "Sec 3", &["Math"]),
                    student("Bob", "922", "Sec 3", &["Art"]),
                ])
                .expect("no duplicates"),
            );
        }

        it "rejects an identity duplicate" {
            let result = model.add_person(student("Alice", "911", "Sec 4", &[]));
            assert_eq!(result, Err(StoreError::DuplicatePerson));
            assert_eq!(model.record_book().persons().len(), 2);
        }

        it "reports a missing target" {
            let ghost = student("Ghost", "999", "Sec 1", &[]);
            assert_eq!(model.delete_person(&ghost), Err(StoreError::PersonNotFound));
        }

        it "drops an edited student that no longer matches the filter" {
            model.update_filtered_persons(PersonPredicate::InClassGroup(class("math")));
            let alice = model.filtered_persons()[0].clone();

            model
                .set_person(&alice, alice.with_class_groups(OrdSet::unit(class("Art"))))
                .expect("replace");

            assert!(model.filtered_persons().is_empty());
            assert_eq!(model.record_book().persons().len(), 2);
        }

        it "keeps the class registry in step with enrolments" {
            assert!(model.record_book().has_class_group(&class("MATH")));
            let bob = model.filtered_persons()[1].clone();

            model.delete_person(&bob).expect("delete");

            assert!(!model.record_book().has_class_group(&class("Art")));
        }

        it "applies a batch of replacements all or nothing" {
            let alice = model.filtered_persons()[0].clone();
            let ghost = student("Ghost", "999", "Sec 1", &[]);
            let batch = vec![
                (alice.clone(), alice.with_level(Level::parse("Sec 4").expect("valid"))),
                (ghost.clone(), ghost.with_level(Level::parse("Sec 2").expect("valid"))),
            ];

            assert_eq!(model.set_persons(batch), Err(StoreError::PersonNotFound));
            assert_eq!(model.filtered_persons()[0], alice);
        }

        it "shows everyone after undo" {
            let alice = model.filtered_persons()[0].clone();
            model.delete_person(&alice).expect("delete");
            model.commit();
            model.update_filtered_persons(PersonPredicate::InClassGroup(class("Art")));

            model.undo().expect("undo");

            assert_eq!(model.predicate(), &PersonPredicate::ShowAll);
            assert_eq!(model.filtered_persons().len(), 2);
        }
    }

    describe "version manager" {
        before {
            let mut versions = VersionManager::new(0);
        }

        it "cannot undo the initial state" {
            assert_eq!(versions.undo(), Err(VersionError::NoPreviousVersion));
            assert_eq!(versions.redo(), Err(VersionError::NoUndoneVersion));
        }

        it "undoes n commits back to the start and redoes them" {
            for n in 1..=4 {
                versions.commit(n);
            }
            for _ in 0..4 {
                versions.undo().expect("undo");
            }
            assert_eq!(versions.current(), &0);
            for _ in 0..4 {
                versions.redo().expect("redo");
            }
            assert_eq!(versions.current(), &4);
        }

        it "clears redo on commit" {
            versions.commit(1);
            versions.undo().expect("undo");
            versions.commit(2);

            assert!(!versions.can_redo());
            assert_eq!(versions.redo(), Err(VersionError::NoUndoneVersion));
        }
    }
}
