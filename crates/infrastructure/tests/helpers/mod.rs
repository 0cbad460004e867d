#![allow(dead_code)]

//! Minimal MaxMind DB writer for geolocation tests: IPv4 tree, 24-bit
//! records, GeoIP2 Country shaped data.

use std::net::Ipv4Addr;

const METADATA_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";
const DATA_SEPARATOR: [u8; 16] = [0; 16];

const STRING: u8 = 2;
const UINT16: u8 = 5;
const UINT32: u8 = 6;
const MAP: u8 = 7;
const UINT64: u8 = 9;
const ARRAY: u8 = 11;

pub const DATABASE_TYPE: &str = "ip-gate-Country-Test";

#[derive(Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

pub struct CountryDbBuilder {
    nodes: Vec<[Slot; 2]>,
    data: Vec<u8>,
}

impl CountryDbBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![[Slot::Empty; 2]],
            data: Vec::new(),
        }
    }

    pub fn network(
        mut self,
        network: Ipv4Addr,
        prefix: u8,
        country: Option<&str>,
        continent: Option<&str>,
    ) -> Self {
        assert!((1..=32).contains(&prefix));
        let offset = self.data.len();
        self.data.extend(country_record(country, continent));

        let bits = u32::from(network);
        let mut node = 0;
        for depth in 0..prefix {
            let bit = ((bits >> (31 - u32::from(depth))) & 1) as usize;
            if depth == prefix - 1 {
                self.nodes[node][bit] = Slot::Data(offset);
                break;
            }
            node = match self.nodes[node][bit] {
                Slot::Node(next) => next,
                _ => {
                    self.nodes.push([Slot::Empty; 2]);
                    let next = self.nodes.len() - 1;
                    self.nodes[node][bit] = Slot::Node(next);
                    next
                }
            };
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let node_count = self.nodes.len();
        let record = |slot: Slot| -> u32 {
            let value = match slot {
                Slot::Empty => node_count,
                Slot::Node(next) => next,
                Slot::Data(offset) => node_count + DATA_SEPARATOR.len() + offset,
            };
            u32::try_from(value).unwrap()
        };

        let mut out = Vec::new();
        for [left, right] in &self.nodes {
            out.extend_from_slice(&record(*left).to_be_bytes()[1..]);
            out.extend_from_slice(&record(*right).to_be_bytes()[1..]);
        }
        out.extend_from_slice(&DATA_SEPARATOR);
        out.extend_from_slice(&self.data);

        out.extend_from_slice(METADATA_MARKER);
        map(&mut out, 9);
        string(&mut out, "binary_format_major_version");
        uint(&mut out, UINT16, 2);
        string(&mut out, "binary_format_minor_version");
        uint(&mut out, UINT16, 0);
        string(&mut out, "build_epoch");
        uint(&mut out, UINT64, 1_700_000_000);
        string(&mut out, "database_type");
        string(&mut out, DATABASE_TYPE);
        string(&mut out, "description");
        map(&mut out, 1);
        string(&mut out, "en");
        string(&mut out, "ip-gate test database");
        string(&mut out, "ip_version");
        uint(&mut out, UINT16, 4);
        string(&mut out, "languages");
        control(&mut out, ARRAY, 1);
        string(&mut out, "en");
        string(&mut out, "node_count");
        uint(&mut out, UINT32, node_count as u64);
        string(&mut out, "record_size");
        uint(&mut out, UINT16, 24);
        out
    }
}

/// 81.2.0.0/16 DE/EU, 8.8.8.0/24 US/NA, 203.0.113.0/24 au/oc (lowercase),
/// 198.51.100.0/24 continent EU only.
pub fn country_db() -> Vec<u8> {
    CountryDbBuilder::new()
        .network(Ipv4Addr::new(81, 2, 0, 0), 16, Some("DE"), Some("EU"))
        .network(Ipv4Addr::new(8, 8, 8, 0), 24, Some("US"), Some("NA"))
        .network(Ipv4Addr::new(203, 0, 113, 0), 24, Some("au"), Some("oc"))
        .network(Ipv4Addr::new(198, 51, 100, 0), 24, None, Some("EU"))
        .build()
}

fn country_record(country: Option<&str>, continent: Option<&str>) -> Vec<u8> {
    let mut out = Vec::new();
    map(
        &mut out,
        usize::from(country.is_some()) + usize::from(continent.is_some()),
    );
    if let Some(code) = continent {
        string(&mut out, "continent");
        map(&mut out, 1);
        string(&mut out, "code");
        string(&mut out, code);
    }
    if let Some(code) = country {
        string(&mut out, "country");
        map(&mut out, 1);
        string(&mut out, "iso_code");
        string(&mut out, code);
    }
    out
}

fn control(out: &mut Vec<u8>, kind: u8, size: usize) {
    assert!(size < 285);
    let size_bits = if size < 29 { size as u8 } else { 29 };
    if kind <= 7 {
        out.push((kind << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(kind - 7);
    }
    if size >= 29 {
        out.push((size - 29) as u8);
    }
}

fn string(out: &mut Vec<u8>, value: &str) {
    control(out, STRING, value.len());
    out.extend_from_slice(value.as_bytes());
}

fn map(out: &mut Vec<u8>, entries: usize) {
    control(out, MAP, entries);
}

fn uint(out: &mut Vec<u8>, kind: u8, value: u64) {
    let bytes = value.to_be_bytes();
    let leading = bytes.iter().take_while(|b| **b == 0).count();
    control(out, kind, bytes.len() - leading);
    out.extend_from_slice(&bytes[leading..]);
}
