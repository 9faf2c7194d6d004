use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Bodies,
    Fragments,
}

/// Count of edges in one outcome class plus their summed fragment size.
/// Size stays zero in whole-body mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Tally {
    pub count: usize,
    pub size: f64,
}

impl Tally {
    pub fn add(&mut self, size: f64) {
        self.count += 1;
        self.size += size;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeStats {
    pub mode: Mode,
    pub correct: Tally,
    pub incorrect: Tally,
    pub redundant: Tally,
    pub orphan: Tally,
    /// Segments (whole-body) or synapse fragments still unresolved.
    pub remaining: usize,
    pub gt_bodies: usize,
}

impl MergeStats {
    pub fn new(mode: Mode, remaining: usize, gt_bodies: usize) -> Self {
        Self {
            mode,
            correct: Tally::default(),
            incorrect: Tally::default(),
            redundant: Tally::default(),
            orphan: Tally::default(),
            remaining,
            gt_bodies,
        }
    }

    /// Edges that reached a decision.
    pub fn decided(&self) -> usize {
        self.correct.count + self.incorrect.count + self.redundant.count + self.orphan.count
    }
}

/// Running state handed to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub index: usize,
    pub confidence: f64,
    pub stats: MergeStats,
}

/// When progress snapshots are emitted, keyed on the edge's position in the
/// ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// `index % n == 0`.
    Every(usize),
    /// `index % n != 0`.
    SkipEvery(usize),
    Never,
}

impl Cadence {
    pub fn admits(self, index: usize) -> bool {
        match self {
            Self::Every(n) => n > 0 && index % n == 0,
            Self::SkipEvery(n) => n > 0 && index % n != 0,
            Self::Never => false,
        }
    }
}

pub trait ProgressObserver {
    fn on_progress(&mut self, progress: &Progress);

    fn finish(&mut self, _stats: &MergeStats) {}
}

impl ProgressObserver for () {
    fn on_progress(&mut self, _progress: &Progress) {}
}

impl ProgressObserver for Vec<Progress> {
    fn on_progress(&mut self, progress: &Progress) {
        self.push(progress.clone());
    }
}

/// Plain-text progress lines and a final summary block.
///
/// Whole-body lines are `correct incorrect redundant remaining gt confidence`.
/// Fragment lines are `correct size incorrect size orphan size remaining gt
/// confidence`. The final block drops the confidence column.
#[derive(Debug)]
pub struct PrintReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> PrintReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the writer, or the first write error encountered.
    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }
}

impl PrintReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ProgressObserver for PrintReporter<W> {
    fn on_progress(&mut self, progress: &Progress) {
        let s = &progress.stats;
        match s.mode {
            Mode::Bodies => self.emit(format_args!(
                "{} {} {} {} {} {}",
                s.correct.count,
                s.incorrect.count,
                s.redundant.count,
                s.remaining,
                s.gt_bodies,
                progress.confidence
            )),
            Mode::Fragments => self.emit(format_args!(
                "{} {} {} {} {} {} {} {} {}",
                s.correct.count,
                s.correct.size,
                s.incorrect.count,
                s.incorrect.size,
                s.orphan.count,
                s.orphan.size,
                s.remaining,
                s.gt_bodies,
                progress.confidence
            )),
        }
    }

    fn finish(&mut self, s: &MergeStats) {
        match s.mode {
            Mode::Bodies => {
                self.emit(format_args!("Final Results (yes, no, redundant, #seg, #gt)"));
                self.emit(format_args!(
                    "{} {} {} {} {}",
                    s.correct.count, s.incorrect.count, s.redundant.count, s.remaining, s.gt_bodies
                ));
            }
            Mode::Fragments => {
                self.emit(format_args!(
                    "Final Results (yes count and size, no count and size, orphan count and size, #syn bodies left, #gt)"
                ));
                self.emit(format_args!(
                    "{} {} {} {} {} {} {} {}",
                    s.correct.count,
                    s.correct.size,
                    s.incorrect.count,
                    s.incorrect.size,
                    s.orphan.count,
                    s.orphan.size,
                    s.remaining,
                    s.gt_bodies
                ));
            }
        }
        if self.error.is_none() {
            self.error = self.out.flush().err();
        }
    }
}
