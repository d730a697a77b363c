//! Display functions for boards and command results

use super::formatters::{column_header, create_progress_bar, label_width};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::{Grid, Position};
use crate::engine::SelectionTracker;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashSet;

/// Print a board with coordinates, highlighting cells for which
/// `highlight` returns true
pub fn print_board_highlighting(grid: &Grid, highlight: impl Fn(Position) -> bool) {
    let width = label_width(grid.size());
    println!("{}", column_header(grid.size()).bright_black());

    for (row, cells) in grid.rows().enumerate() {
        let letters: Vec<ColoredString> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let letter = cell.letter().unwrap_or('.').to_string();
                if highlight(Position::new(row, col)) {
                    letter.bright_yellow().bold()
                } else {
                    letter.normal()
                }
            })
            .collect();

        let line: Vec<String> = letters.iter().map(ToString::to_string).collect();
        println!(
            "{} {}",
            format!("{row:>width$}").bright_black(),
            line.join(" ")
        );
    }
}

/// Print a board with the current selection highlighted
pub fn print_board(grid: &Grid, selection: &SelectionTracker) {
    print_board_highlighting(grid, |pos| selection.contains(pos));
}

/// Print a generated board, optionally with its answer key
pub fn print_generate_result(result: &GenerateResult, show_solution: bool) {
    let grid = &result.board.grid;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {}x{} | seed {}",
        grid.size(),
        grid.size(),
        result.seed.to_string().bright_yellow().bold()
    );
    println!("{}\n", "─".repeat(60).cyan());

    if show_solution {
        let solution: FxHashSet<Position> = result
            .board
            .placements
            .iter()
            .flat_map(|placed| placed.placement.positions().collect::<Vec<_>>())
            .collect();
        print_board_highlighting(grid, |pos| solution.contains(&pos));
    } else {
        print_board_highlighting(grid, |_| false);
    }

    println!("\n📋 {}", "Words:".bright_cyan().bold());
    for placed in &result.board.placements {
        if show_solution {
            println!(
                "   {} {} going {} ({} attempts)",
                format!("{:<14}", placed.placement.word).bright_white().bold(),
                placed.placement.anchor,
                placed.placement.orientation,
                placed.attempts
            );
        } else {
            println!("   {}", placed.placement.word.bright_white().bold());
        }
    }

    println!(
        "\n   Generated in {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!(
        "   Board:            {}x{} with {} words",
        result.board.grid_size, result.board.grid_size, result.board.word_count
    );
    println!("   Boards requested: {}", result.total_boards);
    println!(
        "   Generated:        {}",
        result.generated.to_string().green()
    );
    if result.failures > 0 {
        println!(
            "   Failed:           {}",
            result.failures.to_string().red().bold()
        );
    }

    println!("\n🎲 {}", "Placement attempts:".bright_cyan().bold());
    println!(
        "   Average per board: {}",
        format!("{:.1}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst board:       {}",
        result.max_attempts.to_string().yellow()
    );

    let success_pct = if result.total_boards > 0 {
        result.generated as f64 / result.total_boards as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "   Success rate:      [{}] {success_pct:.1}%",
        create_progress_bar(success_pct, 100.0, 30).green()
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
}
