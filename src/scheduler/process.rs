use crate::error::{Error, Result};
use log::warn;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A task waiting to be executed by the scheduler.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    pub burst_time: u32,
    pub virtual_runtime: u64,
}

impl Process {
    pub fn new<T>(name: T, burst_time: u32, virtual_runtime: u64) -> Self
    where
        T: Into<String>,
    {
        Process {
            name: name.into(),
            burst_time,
            virtual_runtime,
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn is_process_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    name.starts_with("Process ") && bytes.len() == 9 && bytes[8].is_ascii_uppercase()
}

fn parse_number<T>(field: &str, line: &str) -> Result<T>
where
    T: FromStr,
{
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidRecord(line.to_string()));
    }
    field
        .parse()
        .map_err(|_| Error::InvalidRecord(line.to_string()))
}

impl FromStr for Process {
    type Err = Error;

    /// Parses a record of the form `Process <A-Z>,<burst time>,<virtual runtime>`. Runs of tabs
    /// also separate fields.
    fn from_str(line: &str) -> Result<Self> {
        let normalized = line
            .trim()
            .split('\t')
            .filter(|field| !field.is_empty())
            .collect::<Vec<&str>>()
            .join(",");
        let fields = normalized.split(',').collect::<Vec<&str>>();

        match fields.as_slice() {
            [name, burst_time, virtual_runtime] if is_process_name(name) => Ok(Process {
                name: name.to_string(),
                burst_time: parse_number(burst_time, line)?,
                virtual_runtime: parse_number(virtual_runtime, line)?,
            }),
            _ => Err(Error::InvalidRecord(line.to_string())),
        }
    }
}

/// Parses one process per line, skipping the header line. Lines that are not valid records are
/// logged and skipped.
///
/// # Examples
///
/// ```
/// use vruntime_trees::scheduler::{parse_records, Process};
///
/// let input = "Name\tBurst Time\tVirtual Runtime\nProcess A\t3\t0\nProcess B,1,2\n";
/// assert_eq!(
///     parse_records(input),
///     vec![Process::new("Process A", 3, 0), Process::new("Process B", 1, 2)],
/// );
/// ```
pub fn parse_records(input: &str) -> Vec<Process> {
    input
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<Process>() {
            Ok(process) => Some(process),
            Err(error) => {
                warn!("skipping record: {}", error);
                None
            },
        })
        .collect()
}
