/// A one-line conditional expression.  Rust's `if` already is one, but
/// `cargo fmt` spreads every branch over five lines, and the tables of
/// "what is my neighbour at the edge of the grid" read far better
/// when each rule fits on one line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
