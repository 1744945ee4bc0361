//! Renders a user-invitation forest from flat parent-reference records, the
//! shape a `SELECT id, name, invitingUserId FROM users` query would produce.
//!
//! Run with `RUST_LOG=debug` to see which edges were refused.

use arbor::{
    builder::{Record, build},
    render_all,
};

fn main() -> arbor::Result<()> {
    tracing_subscriber::fmt::init();

    let records = vec![
        Record::new(1, "Ada Lovelace", None),
        Record::new(2, "Grace Hopper", Some(1)),
        Record::new(3, "Alan Turing", Some(1)),
        Record::new(4, "Edsger Dijkstra", Some(2)),
        Record::new(5, "Barbara Liskov", Some(2)),
        Record::new(6, "Donald Knuth", None),
        Record::new(7, "Ken Thompson", Some(6)),
        // Mutual invitations close a loop; the second edge is skipped.
        Record::new(8, "Niklaus Wirth", Some(9)),
        Record::new(9, "Tony Hoare", Some(8)),
    ];

    let (forest, skipped) = build(&records);
    for skip in &skipped {
        match skip.parent {
            Some(parent) => eprintln!("skipped edge {} -> {}: {}", parent, skip.id, skip.reason),
            None => eprintln!("skipped record {}: {}", skip.id, skip.reason),
        }
    }
    println!("{}", render_all(&forest)?);
    Ok(())
}
