// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::{
    borrow::Cow,
    sync::{Mutex, MutexGuard, PoisonError},
};

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

lazy_static::lazy_static! {
    static ref WARNING_PRINTER: Mutex<Vec<Vec<Cow<'static, str>>>> = Mutex::new(vec![]);
}

/// The tree symbol to put before a line, given its position in the blocks.
fn tree_symbol(i_line: usize, last_line: bool, last_block: bool) -> char {
    match (i_line, last_line, last_block) {
        (0, false, _) => VERTICAL_AND_RIGHT,
        (0, _, false) => VERTICAL_AND_RIGHT,
        (0, true, true) => UP_AND_RIGHT,
        _ => VERTICAL,
    }
}

/// Log a bold title followed by the blocks as a tree.
fn log_tree(level: log::Level, title: &str, blocks: &[Vec<Cow<'static, str>>]) {
    log::log!(level, "{}", console::style(title).bold());
    let num_blocks = blocks.len();
    for (i_block, block) in blocks.iter().enumerate() {
        let num_lines = block.len();
        for (i_line, line) in block.iter().enumerate() {
            let symbol = tree_symbol(i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks);
            log::log!(level, "{symbol} {line}");
        }
    }
    log::log!(level, "");
}

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Vec<Cow<'static, str>>>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.push(block);
    }

    pub(crate) fn display(self) {
        log_tree(log::Level::Info, &self.title, &self.blocks);
    }
}

/// Lock the queued warnings. Poisoning is ignored.
fn warnings() -> MutexGuard<'static, Vec<Vec<Cow<'static, str>>>> {
    WARNING_PRINTER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

pub(crate) trait Warn {
    fn warn(self);
}

impl Warn for &'static str {
    fn warn(self) {
        warnings().push(vec![self.into()]);
    }
}

impl Warn for String {
    fn warn(self) {
        warnings().push(vec![self.into()]);
    }
}

impl Warn for Cow<'static, str> {
    fn warn(self) {
        warnings().push(vec![self]);
    }
}

impl Warn for Vec<Cow<'static, str>> {
    fn warn(self) {
        warnings().push(self);
    }
}

/// Print out any warnings that have been collected while the CLI arguments
/// were checked, then forget them.
pub(crate) fn display_warnings() {
    log::debug!("Displaying warnings");
    let mut blocks = warnings();
    if blocks.is_empty() {
        return;
    }
    log_tree(log::Level::Warn, "Warnings", &blocks);
    blocks.clear();
}
