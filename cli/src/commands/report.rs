use colored::*;
use menagerie_common::config::Config;
use menagerie_common::inventory::animal::Herbivore;
use menagerie_core::zoo::Zoo;

use crate::terminal::{colors, print};

pub fn animal_report(zoo: &Zoo, cfg: &Config) {
    print::header("animal report", cfg);
    print::aligned_line("Animals", zoo.animal_count().to_string());
    print::aligned_line(
        "Food per day",
        format!("{} kg", zoo.total_food_consumption()).color(colors::FOOD),
    );
    print::blank();
}

pub fn contact_zoo(zoo: &Zoo, cfg: &Config) {
    print::header("contact zoo", cfg);
    let candidates = zoo.contact_zoo_candidates();

    if candidates.is_empty() {
        print::no_results("No animals are suitable for the contact zoo.");
    } else {
        print::print_status("Animals suitable for the contact zoo:");
        print::as_tree_one_level(candidates.iter().map(contact_zoo_line).collect());
    }
    print::blank();
}

pub fn inventory(zoo: &Zoo, cfg: &Config) {
    print::header("inventory", cfg);

    let lines: Vec<ColoredString> = zoo
        .list_inventory()
        .iter()
        .map(|item| item.label().color(colors::INVENTORY))
        .collect();

    if lines.is_empty() {
        print::no_results("The zoo has no inventory yet.");
    } else {
        print::print_status("Inventory items of the zoo:");
        print::as_tree_one_level(lines);
    }
    print::blank();
}

/// `"<label> | Kindness: <k>"`
pub fn format_contact_zoo(herbivore: &Herbivore<'_>) -> String {
    format!("{} | Kindness: {}", herbivore, herbivore.kindness)
}

fn contact_zoo_line(herbivore: &Herbivore<'_>) -> ColoredString {
    format_contact_zoo(herbivore).color(colors::KINDNESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::logging::capture_output;
    use menagerie_common::inventory::animal::Animal;
    use menagerie_common::inventory::thing::Thing;
    use menagerie_core::clinic::ApproveAll;

    fn cfg() -> Config {
        Config { no_banner: true, quiet: 1 }
    }

    fn stocked_zoo() -> Zoo {
        let mut zoo = Zoo::new(Box::new(ApproveAll));
        zoo.add_thing(Thing::table("Desk", 9));
        let _ = zoo.add_animal(Animal::monkey("Koko", 5, 1, 8));
        let _ = zoo.add_animal(Animal::tiger("Rex", 10, 2));
        zoo
    }

    #[test]
    fn test_contact_zoo_line() {
        let mut zoo = Zoo::new(Box::new(ApproveAll));
        let _ = zoo.add_animal(Animal::monkey("Koko", 5, 1, 8));

        let candidates = zoo.contact_zoo_candidates();
        assert_eq!(
            format_contact_zoo(&candidates[0]),
            "Koko (Inv. No. 1) | Kindness: 8"
        );
    }

    #[test]
    fn test_animal_report_output() {
        let zoo = stocked_zoo();
        let output = capture_output(|| animal_report(&zoo, &cfg()));
        assert_eq!(output, "> Animals........: 2\n> Food per day...: 15 kg\n\n");
    }

    #[test]
    fn test_animal_report_of_empty_zoo() {
        let zoo = Zoo::new(Box::new(ApproveAll));
        let output = capture_output(|| animal_report(&zoo, &cfg()));
        assert_eq!(output, "> Animals........: 0\n> Food per day...: 0 kg\n\n");
    }

    #[test]
    fn test_contact_zoo_output() {
        let zoo = stocked_zoo();
        let output = capture_output(|| contact_zoo(&zoo, &cfg()));
        assert_eq!(
            output,
            "> Animals suitable for the contact zoo:\n \
             └─ Koko (Inv. No. 1) | Kindness: 8\n\n"
        );
    }

    #[test]
    fn test_contact_zoo_without_candidates() {
        let mut zoo = Zoo::new(Box::new(ApproveAll));
        let _ = zoo.add_animal(Animal::rabbit("Flop", 1, 3, 5));
        let output = capture_output(|| contact_zoo(&zoo, &cfg()));

        let lines: Vec<&str> = output.lines().map(str::trim).collect();
        assert_eq!(lines, ["No animals are suitable for the contact zoo.", ""]);
    }

    #[test]
    fn test_inventory_output_lists_animals_then_things() {
        let zoo = stocked_zoo();
        let output = capture_output(|| inventory(&zoo, &cfg()));
        assert_eq!(
            output,
            "> Inventory items of the zoo:\n \
             ├─ Koko (Inv. No. 1)\n \
             ├─ Rex (Inv. No. 2)\n \
             └─ Desk (Inv. No. 9)\n\n"
        );
    }

    #[test]
    fn test_inventory_output_when_empty() {
        let zoo = Zoo::new(Box::new(ApproveAll));
        let output = capture_output(|| inventory(&zoo, &cfg()));
        assert!(output.contains("The zoo has no inventory yet."));
        assert!(!output.contains("Inventory items"));
    }

    #[test]
    fn test_headers_follow_quiet_level() {
        let zoo = stocked_zoo();
        let loud = Config { no_banner: true, quiet: 0 };
        let output = capture_output(|| animal_report(&zoo, &loud));
        assert!(output.starts_with('─'));
        assert!(output.lines().next().unwrap().contains("⟦ ANIMAL REPORT ⟧"));
    }
}
