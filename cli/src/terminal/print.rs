use std::time::Duration;

use colored::*;
use rigscan_common::network::miner::{Miner, Status};
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn aligned_line(key: &str, value: ColoredString, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

fn status_label(status: Status) -> ColoredString {
    match status {
        Status::Online => "ONLINE".color(colors::ONLINE).bold(),
        Status::Offline => "offline".color(colors::OFFLINE).dimmed(),
    }
}

/// One line per miner, `[idx] ip ..... : status`.
pub fn miners(miners: &[Miner]) {
    let ip_width: usize = miners.iter().map(|m| m.ip.len()).max().unwrap_or(0);

    for (idx, miner) in miners.iter().enumerate() {
        let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
        let dots: String = ".".repeat(ip_width + 1 - miner.ip.len());
        let output: String = format!(
            "{} {}{}{} {}",
            idx_str.color(colors::SEPARATOR),
            miner.ip.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            status_label(miner.status)
        );
        print(&output);
    }
}

pub fn summary(online: usize, total: usize, elapsed: Duration) {
    let online: ColoredString = format!("{online} of {total} hosts online").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!("Scan Complete: {online} in {elapsed}");

    fat_separator();
    centerln(&output);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
