use menagerie_common::inventory::animal::Animal;
use menagerie_common::inventory::thing::Thing;

use crate::util::{approving_zoo, labels, scripted_zoo};

fn herd() -> Vec<Animal> {
    vec![
        Animal::monkey("Koko", 5, 1, 8),
        Animal::tiger("Rex", 10, 2),
        Animal::rabbit("Flop", 1, 3, 5),
        Animal::wolf("Grey", 8, 4),
        Animal::rabbit("Clover", 2, 5, 6),
        Animal::monkey("Grump", 4, 6, 0),
    ]
}

#[test]
fn total_food_sums_only_admitted_animals() {
    let verdicts = [true, false, true, true, false, true];
    let mut zoo = scripted_zoo(&verdicts);

    let mut expected = 0u64;
    for (animal, admitted) in herd().into_iter().zip(verdicts) {
        if admitted {
            expected += u64::from(animal.daily_food_kg);
        }
        let _ = zoo.add_animal(animal);
    }

    assert_eq!(zoo.total_food_consumption(), expected);
    assert_eq!(expected, 5 + 1 + 8 + 4);
}

#[test]
fn total_food_of_empty_zoo_is_zero() {
    let mut zoo = approving_zoo();
    zoo.add_thing(Thing::computer("Laptop", 10));
    assert_eq!(zoo.total_food_consumption(), 0);
}

#[test]
fn total_food_does_not_overflow_u32() {
    let mut zoo = approving_zoo();
    let _ = zoo.add_animal(Animal::tiger("Big", u32::MAX, 1));
    let _ = zoo.add_animal(Animal::tiger("Bigger", u32::MAX, 2));
    assert_eq!(zoo.total_food_consumption(), 2 * u64::from(u32::MAX));
}

#[test]
fn contact_zoo_keeps_admission_order_and_skips_kindness_five() {
    let mut zoo = approving_zoo();
    for animal in herd() {
        let _ = zoo.add_animal(animal);
    }

    let candidates: Vec<(String, i32)> = zoo
        .contact_zoo_candidates()
        .iter()
        .map(|herbivore| (herbivore.animal.name.clone(), herbivore.kindness))
        .collect();

    assert_eq!(
        candidates,
        [("Koko".to_string(), 8), ("Clover".to_string(), 6)]
    );
}

#[test]
fn contact_zoo_ignores_rejected_herbivores() {
    let mut zoo = scripted_zoo(&[false, true]);
    let _ = zoo.add_animal(Animal::monkey("Koko", 5, 1, 8));
    let _ = zoo.add_animal(Animal::rabbit("Clover", 2, 5, 6));

    let candidates = zoo.contact_zoo_candidates();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].to_string(), "Clover (Inv. No. 5)");
}

#[test]
fn inventory_length_is_animals_plus_things() {
    let mut zoo = approving_zoo();
    zoo.add_thing(Thing::table("Desk", 9));
    for animal in herd() {
        let _ = zoo.add_animal(animal);
    }
    zoo.add_thing(Thing::computer("Laptop", 10));

    let listing = labels(&zoo);
    assert_eq!(listing.len(), zoo.animals().len() + zoo.things().len());
    assert_eq!(listing[0], "Koko (Inv. No. 1)");
    assert_eq!(listing[5], "Grump (Inv. No. 6)");
    assert_eq!(&listing[6..], ["Desk (Inv. No. 9)", "Laptop (Inv. No. 10)"]);
}
