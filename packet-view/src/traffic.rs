//! Where the viewer's send events come from.

use std::collections::VecDeque;

use packet_core::traffic::{TrafficEvent, Transport};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Address the synthetic generator treats as this machine.
pub const LOCAL_HOST: &str = "192.168.1.10";

pub trait TrafficSource {
    /// Next event to show, or `None` once the source is exhausted.
    fn next_event(&mut self) -> Option<TrafficEvent>;
}

/// Random traffic between a fixed set of hosts, most of it touching the local host.
pub struct SyntheticTraffic {
    hosts: Vec<String>,
    rng: StdRng,
}

impl SyntheticTraffic {
    /// `remotes` remote hosts plus [`LOCAL_HOST`].
    pub fn new(remotes: usize, seed: u64) -> Self {
        let mut hosts = Vec::with_capacity(remotes + 1);
        hosts.push(LOCAL_HOST.to_owned());
        hosts.extend((1..=remotes).map(|i| format!("10.0.{}.{}", i / 250, i % 250 + 1)));
        Self {
            hosts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}

impl TrafficSource for SyntheticTraffic {
    fn next_event(&mut self) -> Option<TrafficEvent> {
        if self.hosts.len() < 2 {
            return None;
        }

        let remote = self.rng.random_range(1..self.hosts.len());
        let (src, dest) = if self.rng.random_bool(0.5) {
            (0, remote)
        } else {
            (remote, 0)
        };

        let transport = if self.rng.random_bool(0.7) {
            Transport::Tcp
        } else {
            Transport::Udp
        };
        let len = self.rng.random_range(40..=1500);

        Some(
            TrafficEvent::new(self.hosts[src].clone(), self.hosts[dest].clone(), len)
                .with_transport(transport),
        )
    }
}

/// Events read ahead of time from a JSON-lines capture log.
#[derive(Default)]
pub struct Replay {
    events: VecDeque<TrafficEvent>,
}

impl Replay {
    /// Parses one event per non-empty line, skipping lines that fail to parse.
    pub fn from_jsonl(text: &str) -> Self {
        let events = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(n, line)| match TrafficEvent::from_json(line) {
                Ok(ev) => Some(ev),
                Err(err) => {
                    tracing::warn!(line = n + 1, %err, "skipping malformed event");
                    None
                }
            })
            .collect();
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TrafficSource for Replay {
    fn next_event(&mut self) -> Option<TrafficEvent> {
        self.events.pop_front()
    }
}
