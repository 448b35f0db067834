use menagerie_common::inventory::Inventoried;
use menagerie_core::clinic::{ApproveAll, RejectAll, ScriptedClinic};
use menagerie_core::zoo::Zoo;

pub fn approving_zoo() -> Zoo {
    Zoo::new(Box::new(ApproveAll))
}

pub fn rejecting_zoo() -> Zoo {
    Zoo::new(Box::new(RejectAll))
}

pub fn scripted_zoo(verdicts: &[bool]) -> Zoo {
    Zoo::new(Box::new(ScriptedClinic::new(verdicts.iter().copied())))
}

pub fn labels(zoo: &Zoo) -> Vec<String> {
    zoo.list_inventory().iter().map(|item| item.label()).collect()
}
