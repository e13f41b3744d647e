//! Interactive bar-chart replays of the algoviz algorithms.
//!
//! Each mode runs one algorithm on a small fixed input, records every step
//! with a [`ChartObserver`], and opens a window with a slider for stepping
//! through them.
//!
//! # Usage
//!
//! ```text
//! cargo run --example chart --features plot -- sort
//! cargo run --example chart --features plot -- search
//! cargo run --example chart --features plot -- dijkstra
//! cargo run --example chart --features plot -- knapsack
//! ```

use std::error::Error;

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::{WeightedGraph, dijkstra},
    searching::binary,
    sorting::bubble,
};
use algoviz_observers::ChartObserver;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sort".into());
    let mut chart = ChartObserver::new();

    let title = match mode.as_str() {
        "sort" => {
            bubble::sort(&mut [5, 2, 8, 1, 9], &mut chart);
            "Bubble sort"
        }
        "search" => {
            binary::search(&[1, 2, 5, 8, 9, 12, 15], &12, &mut chart);
            "Binary search"
        }
        "dijkstra" => {
            let graph: WeightedGraph = "A:B,4;C,2 B:C,1;D,5 C:D,3".parse()?;
            dijkstra::solve(&graph, "A", &mut chart);
            "Dijkstra"
        }
        "knapsack" => {
            knapsack::solve(&[1, 3, 4, 5], &[1, 4, 5, 7], 7, &mut chart);
            "0/1 knapsack"
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: chart [sort|search|dijkstra|knapsack]");
            std::process::exit(1);
        }
    };

    chart.show(title)?;
    Ok(())
}
