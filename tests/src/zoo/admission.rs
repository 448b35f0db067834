use std::cell::Cell;
use std::rc::Rc;

use menagerie_common::clinic::HealthCheck;
use menagerie_common::inventory::animal::{Animal, Species};
use menagerie_common::inventory::thing::Thing;
use menagerie_core::zoo::{Admission, Zoo};

use crate::util::{approving_zoo, labels, rejecting_zoo, scripted_zoo};

/// Health check that remembers how often it was consulted.
struct CountingClinic {
    calls: Rc<Cell<usize>>,
    verdict: bool,
}

impl HealthCheck for CountingClinic {
    fn check_animal(&mut self, _animal: &Animal) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.verdict
    }
}

#[test]
fn koko_and_rex_round_trip() {
    let mut zoo = approving_zoo();

    assert!(zoo.add_animal(Animal::monkey("Koko", 5, 1, 8)).is_admitted());
    let candidates = zoo.contact_zoo_candidates();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].animal.name, "Koko");

    assert!(zoo.add_animal(Animal::tiger("Rex", 10, 2)).is_admitted());
    assert_eq!(zoo.total_food_consumption(), 15);
    assert_eq!(labels(&zoo), ["Koko (Inv. No. 1)", "Rex (Inv. No. 2)"]);
}

#[test]
fn grey_is_turned_away() {
    let mut zoo = rejecting_zoo();
    let admission = zoo.add_animal(Animal::wolf("Grey", 8, 3));

    assert_eq!(admission, Admission::Rejected);
    assert_eq!(zoo.animals().len(), 0);
    assert!(labels(&zoo).is_empty());
}

#[test]
fn desk_is_listed_after_every_animal() {
    let mut zoo = rejecting_zoo();
    zoo.add_thing(Thing::table("Desk", 9));
    let _ = zoo.add_animal(Animal::wolf("Grey", 8, 3));
    assert_eq!(labels(&zoo), ["Desk (Inv. No. 9)"]);

    let mut zoo = approving_zoo();
    zoo.add_thing(Thing::table("Desk", 9));
    let _ = zoo.add_animal(Animal::wolf("Grey", 8, 3));
    assert_eq!(labels(&zoo), ["Grey (Inv. No. 3)", "Desk (Inv. No. 9)"]);
}

#[test]
fn each_admission_consults_the_clinic_once() {
    let calls = Rc::new(Cell::new(0));
    let mut zoo = Zoo::new(Box::new(CountingClinic {
        calls: Rc::clone(&calls),
        verdict: true,
    }));

    for species in Species::ALL {
        let _ = zoo.add_animal(species.build(species.name(), 1, 1, 1));
    }
    zoo.add_thing(Thing::computer("Laptop", 10));

    assert_eq!(calls.get(), Species::ALL.len());
    assert_eq!(zoo.animal_count(), Species::ALL.len());
}

#[test]
fn rejection_never_mutates_and_admission_appends_one() {
    let verdicts = [true, false, false, true, false];
    let mut zoo = scripted_zoo(&verdicts);

    for (idx, verdict) in verdicts.iter().enumerate() {
        let before = zoo.animal_count();
        let admission = zoo.add_animal(Animal::rabbit(format!("R{idx}"), 1, idx as u32, 6));
        let expected = if *verdict { before + 1 } else { before };

        assert_eq!(admission.is_admitted(), *verdict);
        assert_eq!(zoo.animal_count(), expected);
    }

    let names: Vec<&str> = zoo.animals().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["R0", "R3"]);
}
