//! Classify a fixed set of contrived records into animals and IDs.
//!
//! Takes no arguments and reads no input; the record collection is
//! hardcoded. Each registered pipeline runs against the same original
//! collection independently, and its survivors are printed one per line
//! under a labeled heading.

use record_sieve::{Record, Registry};

fn main() {
    let records: Vec<Record> = [
        "Cat",
        "A sentence is not a valid record.",
        "Minotaur",
        "cd5169bf-3649-4091-862b-c7ec1de92fd9-cd5169bf-3649-4091-862b-c7ec1de92fd9-cd5169bf-3649-4091-862b-c7ec1de92fd9",
        "3412-3241",
        "Dragon",
        "Cat",
    ]
    .iter()
    .map(|t| Record::new(*t))
    .collect();

    let registry = Registry::new();

    for pipeline in registry.iter() {
        println!("{}:", pipeline.kind().label());
        for record in pipeline.run(&records) {
            println!("{record}");
        }
    }
}
