//! End-to-end query plan tests over a small messaging schema.
//!
//! Three tables: `user(user_id, username, birth_date)`,
//! `routing(from_user_id, to_user_id, message_id)`, and
//! `message(message_id, send_date, text)`. Each test builds a plan tree with
//! the `plan` constructors, runs it to completion, and checks the produced
//! rows. Plans are run twice where noted to confirm a reopened tree
//! reproduces its output.

use std::io::Write as _;

use trellisdb::{drain, plan, BoxedOperator, ColumnNames, Database, Row, RowHandle};

fn load(db: &mut Database, name: &str, columns: &[&str], rows: &[&[&str]]) {
    let table = db.create_table(name, ColumnNames::new(columns.iter().copied())).unwrap();
    for row in rows {
        table.insert(row.iter().map(|v| (*v).to_string()).collect()).unwrap();
    }
}

fn fixture() -> Database {
    let mut db = Database::new();
    load(
        &mut db,
        "user",
        &["user_id", "username", "birth_date"],
        &[
            &["1", "ada", "1984/02/28"],
            &["2", "grace", "1991/07/04"],
            &["3", "alan", "1976/03/15"],
            &["4", "edsger", "2002/11/30"],
        ],
    );
    // The nested-loop join enumerates all matches only over inputs whose
    // equal join keys are contiguous, so routing rows are grouped by
    // to_user_id and message rows follow routing's message_id order.
    load(
        &mut db,
        "routing",
        &["from_user_id", "to_user_id", "message_id"],
        &[
            &["2", "1", "10"],
            &["3", "2", "14"],
            &["1", "2", "15"],
            &["2", "3", "11"],
            &["1", "3", "13"],
            &["2", "4", "12"],
        ],
    );
    load(
        &mut db,
        "message",
        &["message_id", "send_date", "text"],
        &[
            &["10", "2016/02/09", "hello"],
            &["14", "2015/12/25", "merry"],
            &["15", "2016/12/14", "see you"],
            &["11", "2015/01/09", "lunch?"],
            &["13", "2016/03/15", "happy birthday"],
            &["12", "2016/02/09", "ping"],
        ],
    );
    db
}

fn run(plan: &mut BoxedOperator) -> Vec<RowHandle> {
    plan.open().unwrap();
    let rows = drain(plan.as_mut()).unwrap();
    plan.close().unwrap();
    rows
}

fn single_column(rows: &[RowHandle]) -> Vec<&str> {
    rows.iter()
        .map(|row| {
            assert_eq!(row.len(), 1);
            row.at(0)
        })
        .collect()
}

// ============================================================================
// Single-table lookups
// ============================================================================

mod single_table {
    use super::*;

    // What is ada's birth date?
    #[test]
    fn birth_date_by_username() {
        let db = fixture();
        let mut q = plan::project(
            plan::select(
                plan::table_scan(db.table("user").unwrap()),
                Box::new(|row| row.at(1) == "ada"),
            ),
            &[2],
        )
        .unwrap();
        for _ in 0..2 {
            assert_eq!(single_column(&run(&mut q)), ["1984/02/28"]);
        }
    }

    #[test]
    fn unknown_username_yields_nothing() {
        let db = fixture();
        let mut q = plan::select(
            plan::table_scan(db.table("user").unwrap()),
            Box::new(|row| row.at(1) == "nobody"),
        );
        assert!(run(&mut q).is_empty());
    }
}

// ============================================================================
// Join pipelines
// ============================================================================

mod joins {
    use super::*;

    // What are the send dates of messages sent by grace? Two dates coincide,
    // so the sort/unique tail collapses them.
    fn send_dates_by_grace(sender: BoxedOperator, db: &Database) -> BoxedOperator {
        plan::unique(
            plan::sort(
                plan::project(
                    plan::nested_loops_join(
                        plan::nested_loops_join(
                            sender,
                            &[0],
                            plan::table_scan(db.table("routing").unwrap()),
                            &[0],
                        )
                        .unwrap(),
                        &[4],
                        plan::table_scan(db.table("message").unwrap()),
                        &[0],
                    )
                    .unwrap(),
                    &[5],
                )
                .unwrap(),
                &[0],
            )
            .unwrap(),
        )
    }

    #[test]
    fn send_dates_via_table_scan() {
        let db = fixture();
        let sender = plan::select(
            plan::table_scan(db.table("user").unwrap()),
            Box::new(|row| row.at(1) == "grace"),
        );
        let mut q = send_dates_by_grace(sender, &db);
        for _ in 0..2 {
            assert_eq!(single_column(&run(&mut q)), ["2015/01/09", "2016/02/09"]);
        }
    }

    #[test]
    fn send_dates_via_index_scan() {
        let db = fixture();
        let index = db.table("user").unwrap().add_index(&["username"]).unwrap();
        let sender = plan::index_scan(index, Row::literal(["grace"]), None);
        let mut q = send_dates_by_grace(sender, &db);
        assert_eq!(single_column(&run(&mut q)), ["2015/01/09", "2016/02/09"]);
    }

    // Which users received a message on their birthday? The join output lays
    // out user columns 0..=2, then from_user_id, message_id, send_date, text.
    #[test]
    fn birthday_messages() {
        let db = fixture();
        let mut q = plan::project(
            plan::select(
                plan::nested_loops_join(
                    plan::nested_loops_join(
                        plan::table_scan(db.table("user").unwrap()),
                        &[0],
                        plan::table_scan(db.table("routing").unwrap()),
                        &[1],
                    )
                    .unwrap(),
                    &[4],
                    plan::table_scan(db.table("message").unwrap()),
                    &[0],
                )
                .unwrap(),
                // Dates are yyyy/mm/dd; compare the mm/dd part of the birth
                // date and the send date.
                Box::new(|row| row.at(2)[5..] == row.at(5)[5..]),
            ),
            &[1],
        )
        .unwrap();
        assert_eq!(single_column(&run(&mut q)), ["alan"]);
    }

    // What are the send dates of messages from ada to grace? The middle join
    // against a one-column sender/recipient list contributes no columns of
    // its own.
    #[test]
    fn messages_between_two_users() {
        let db = fixture();
        let user_id_of = |name: &'static str| {
            plan::project(
                plan::select(
                    plan::table_scan(db.table("user").unwrap()),
                    Box::new(move |row| row.at(1) == name),
                ),
                &[0],
            )
            .unwrap()
        };
        let mut q = plan::project(
            plan::nested_loops_join(
                plan::nested_loops_join(
                    plan::nested_loops_join(
                        user_id_of("ada"),
                        &[0],
                        plan::table_scan(db.table("routing").unwrap()),
                        &[0],
                    )
                    .unwrap(),
                    &[1],
                    user_id_of("grace"),
                    &[0],
                )
                .unwrap(),
                &[2],
                plan::table_scan(db.table("message").unwrap()),
                &[0],
            )
            .unwrap(),
            &[3],
        )
        .unwrap();
        for _ in 0..2 {
            assert_eq!(single_column(&run(&mut q)), ["2016/12/14"]);
        }
    }
}

// ============================================================================
// Loading from delimited text
// ============================================================================

mod csv_loading {
    use super::*;

    #[test]
    fn quoted_csv_feeds_a_plan() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\"1\",\"ada\",\"1984/02/28\"").unwrap();
        writeln!(file, "\"2\",\"grace\",\"1991/07/04\"").unwrap();
        file.flush().unwrap();

        let mut db = Database::new();
        let user = db
            .create_table("user", ColumnNames::new(["user_id", "username", "birth_date"]))
            .unwrap();
        let loaded = trellisdb::load_csv(&user, file.path()).unwrap();
        assert_eq!(loaded, 2);

        let mut q = plan::project(
            plan::select(
                plan::table_scan(user),
                Box::new(|row| row.at(1) == "ada"),
            ),
            &[2],
        )
        .unwrap();
        assert_eq!(single_column(&run(&mut q)), ["1984/02/28"]);
    }
}
