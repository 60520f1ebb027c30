const SECONDS_PER_DAY: u64 = 60 * 60 * 24;

/// How long a solve would take by hand at one move per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypotheticalTime {
    pub disks: usize,
    pub moves: u64,
    pub time: String,
}

impl HypotheticalTime {
    pub fn new(disks: usize, moves: u64) -> Self {
        HypotheticalTime {
            disks,
            moves,
            time: format_duration(moves),
        }
    }
}

/// Render seconds as "D days, H hours, M minutes, S seconds".
pub fn format_duration(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let rest = seconds % SECONDS_PER_DAY;
    let hours = rest / 3600;
    let minutes = (rest % 3600) / 60;
    let secs = rest % 60;
    format!("{days} days, {hours} hours, {minutes} minutes, {secs} seconds")
}

/// Insert a row keeping the table ordered by disk count. A row for a disk
/// count already present replaces it.
pub fn insert_sorted(rows: &mut Vec<HypotheticalTime>, row: HypotheticalTime) {
    match rows.binary_search_by_key(&row.disks, |r| r.disks) {
        Ok(idx) => rows[idx] = row,
        Err(idx) => rows.insert(idx, row),
    }
}
