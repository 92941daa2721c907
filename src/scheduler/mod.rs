//! A process scheduler that repeatedly runs the process with the least virtual runtime.
//!
//! Waiting processes are kept in an `OrderedMap` keyed by virtual runtime. Every step removes
//! the minimum, runs it for one time slice and puts it back under its advanced virtual runtime
//! until its burst time is used up. Processes that share a virtual runtime run in the order they
//! were queued.

mod process;

pub use self::process::{parse_records, Process};

use crate::error::{Error, Result};
use crate::map::{new_map, OrderedMap, TreeKind};
use log::{debug, info};
use std::cmp;

/// Configuration for a `Scheduler`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// The tree backing the run queue.
    pub tree: TreeKind,
    /// Virtual runtime charged to a process each time it runs. Must be positive.
    pub time_slice: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tree: TreeKind::Avl,
            time_slice: 1,
        }
    }
}

/// A record of one execution of a process, taken when the process was picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    pub name: String,
    pub burst_time: u32,
    pub virtual_runtime: u64,
}

/// A run queue ordered by virtual runtime.
///
/// # Examples
///
/// ```
/// use vruntime_trees::TreeKind;
/// use vruntime_trees::scheduler::{Config, Process, Scheduler};
///
/// let config = Config {
///     tree: TreeKind::RedBlack,
///     time_slice: 1,
/// };
/// let mut scheduler = Scheduler::new(config).unwrap();
/// scheduler.add(Process::new("Process A", 1, 0));
///
/// let names = scheduler
///     .run()
///     .into_iter()
///     .map(|slice| slice.name)
///     .collect::<Vec<String>>();
/// assert_eq!(names, vec!["Process A", "Process A"]);
/// assert!(scheduler.is_empty());
/// ```
pub struct Scheduler {
    config: Config,
    queue: Box<dyn OrderedMap<u64, Process>>,
}

impl Scheduler {
    /// Constructs a scheduler with an empty run queue. Returns `Error::InvalidConfig` if the time
    /// slice is zero.
    pub fn new(config: Config) -> Result<Self> {
        if config.time_slice == 0 {
            return Err(Error::InvalidConfig(String::from(
                "time slice must be positive",
            )));
        }
        Ok(Scheduler {
            config,
            queue: new_map(config.tree),
        })
    }

    /// Returns the configuration the scheduler was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Queues a process under its current virtual runtime.
    pub fn add(&mut self, process: Process) {
        debug!(
            "queueing {} at virtual runtime {}",
            process.name, process.virtual_runtime,
        );
        self.queue.put(process.virtual_runtime, process);
    }

    /// Returns `true` if no process is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of waiting processes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Runs the process with the least virtual runtime for one time slice. A process with burst
    /// time left is charged the time slice and queued again; a process with none left is dropped.
    /// Virtual runtime saturates at `u64::MAX`.
    ///
    /// Returns `Error::EmptyCollection` if no process is waiting.
    pub fn step(&mut self) -> Result<Slice> {
        let mut process = self.queue.remove_min()?;
        info!(
            "executing {}, burst time: {} ms, virtual runtime: {} ms",
            process.name, process.burst_time, process.virtual_runtime,
        );
        let slice = Slice {
            name: process.name.clone(),
            burst_time: process.burst_time,
            virtual_runtime: process.virtual_runtime,
        };

        if process.burst_time > 0 {
            process.burst_time -= cmp::min(process.burst_time, self.config.time_slice);
            process.virtual_runtime = process
                .virtual_runtime
                .saturating_add(u64::from(self.config.time_slice));
            self.queue.put(process.virtual_runtime, process);
        }
        Ok(slice)
    }

    /// Steps until no process is waiting and returns every slice in execution order.
    pub fn run(&mut self) -> Vec<Slice> {
        let mut slices = Vec::new();
        while let Ok(slice) = self.step() {
            slices.push(slice);
        }
        slices
    }
}

impl Extend<Process> for Scheduler {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Process>,
    {
        for process in iter {
            self.add(process);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_records, Config, Process, Scheduler, Slice};
    use crate::error::Error;
    use crate::map::TreeKind;

    fn slice(name: &str, burst_time: u32, virtual_runtime: u64) -> Slice {
        Slice {
            name: name.to_string(),
            burst_time,
            virtual_runtime,
        }
    }

    fn scheduler(tree: TreeKind, time_slice: u32) -> Scheduler {
        Scheduler::new(Config { tree, time_slice }).unwrap()
    }

    #[test]
    fn test_default_config() {
        let scheduler = Scheduler::new(Config::default()).unwrap();
        assert_eq!(scheduler.config(), &Config::default());
        assert_eq!(
            Config::default(),
            Config {
                tree: TreeKind::Avl,
                time_slice: 1,
            },
        );
    }

    #[test]
    fn test_zero_time_slice_rejected() {
        assert!(match Scheduler::new(Config {
            tree: TreeKind::Avl,
            time_slice: 0,
        }) {
            Err(Error::InvalidConfig(_)) => true,
            _ => false,
        });
    }

    #[test]
    fn test_step_empty() {
        let mut scheduler = scheduler(TreeKind::Avl, 1);
        assert_eq!(scheduler.step(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_run_interleaves_processes() {
        for tree in &[TreeKind::Avl, TreeKind::RedBlack] {
            let mut scheduler = scheduler(*tree, 1);
            scheduler.add(Process::new("Process A", 2, 0));
            scheduler.add(Process::new("Process B", 1, 0));
            assert_eq!(scheduler.len(), 2);

            assert_eq!(
                scheduler.run(),
                vec![
                    slice("Process A", 2, 0),
                    slice("Process B", 1, 0),
                    slice("Process A", 1, 1),
                    slice("Process B", 0, 1),
                    slice("Process A", 0, 2),
                ],
            );
            assert!(scheduler.is_empty());
        }
    }

    #[test]
    fn test_time_slice_caps_burst_time() {
        let mut scheduler = scheduler(TreeKind::RedBlack, 4);
        scheduler.extend(vec![
            Process::new("Process A", 6, 0),
            Process::new("Process B", 1, 5),
        ]);

        assert_eq!(
            scheduler.run(),
            vec![
                slice("Process A", 6, 0),
                slice("Process A", 2, 4),
                slice("Process B", 1, 5),
                slice("Process A", 0, 8),
                slice("Process B", 0, 9),
            ],
        );
    }

    #[test]
    fn test_record_limits() {
        let max = u64::max_value();
        for tree in &[TreeKind::Avl, TreeKind::RedBlack] {
            let mut scheduler = scheduler(*tree, u32::max_value());
            scheduler.extend(parse_records(&format!(
                "header\nProcess A,4,{}\nProcess B,{},0\n",
                max - 1,
                u32::max_value(),
            )));
            assert_eq!(scheduler.len(), 2);

            assert_eq!(
                scheduler.run(),
                vec![
                    slice("Process B", u32::max_value(), 0),
                    slice("Process B", 0, u64::from(u32::max_value())),
                    slice("Process A", 4, max - 1),
                    slice("Process A", 0, max),
                ],
            );
            assert!(scheduler.is_empty());
        }
    }

    #[test]
    fn test_both_trees_schedule_identically() {
        let processes = (0..26u8)
            .map(|i| {
                let name = format!("Process {}", (b'A' + i) as char);
                Process::new(name, u32::from(i % 7), u64::from(i % 5))
            })
            .collect::<Vec<Process>>();

        let mut avl = scheduler(TreeKind::Avl, 1);
        let mut red_black = scheduler(TreeKind::RedBlack, 1);
        avl.extend(processes.clone());
        red_black.extend(processes);

        let avl_slices = avl.run();
        assert_eq!(avl_slices, red_black.run());
        assert!(avl_slices
            .windows(2)
            .all(|pair| pair[0].virtual_runtime <= pair[1].virtual_runtime));
    }
}
