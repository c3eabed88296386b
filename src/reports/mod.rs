use crate::cmd::OutputArgs;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tsp_anneal::api::{Problem, Solution};
use tsp_anneal::error::{TspError, TspResult};
use tsp_anneal::export;

/// Prints the solution (table or JSON) and writes the CSV export if asked.
pub fn emit(solution: &Solution, problem: &Problem, output: &OutputArgs) -> TspResult<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(solution)?);
    } else {
        print_summary(solution);
        print_route(solution);
    }

    if let Some(path) = &output.export {
        let points = problem.coordinates.as_deref().ok_or_else(|| {
            TspError::Config("--export needs city coordinates (--coords)".to_string())
        })?;
        export::export_route_csv(path, &solution.route, points)?;
    }
    Ok(())
}

pub fn print_summary(solution: &Solution) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Method"),
        Cell::new(solution.method.to_string()).fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Cities"), Cell::new(solution.route.len())]);

    if let Some(stats) = &solution.stats {
        table.add_row(vec![
            Cell::new("Initial length"),
            Cell::new(format!("{:.3}", solution.initial_length)),
        ]);
        table.add_row(vec![
            Cell::new("Improvement"),
            Cell::new(format!("{:.2}%", solution.improvement_pct())).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Temperature steps"),
            Cell::new(stats.temperature_steps),
        ]);
        table.add_row(vec![
            Cell::new("Acceptance"),
            Cell::new(format!(
                "{:.2}% of {}",
                stats.acceptance_rate() * 100.0,
                stats.trials
            )),
        ]);
        if let Some(t) = solution.final_temperature {
            table.add_row(vec![
                Cell::new("Final temperature"),
                Cell::new(format!("{:.4}", t)),
            ]);
        }
        if solution.stopped_early {
            table.add_row(vec![Cell::new("Stopped early"), Cell::new("yes").fg(Color::Red)]);
        }
    }

    table.add_row(vec![
        Cell::new("Length").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", solution.length)).add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

/// Plain lines in the classic layout: tour, length, wall-clock time.
pub fn print_route(solution: &Solution) {
    println!("Route: {}", solution.route);
    println!("Length: {:.6}", solution.length);
    println!("Execution time: {:.6} seconds", solution.elapsed_secs);
}
