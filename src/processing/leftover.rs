//! Leftover address space.
//!
//! Splits the unused part of a base network into the largest aligned blocks.

use crate::models::{lo_mask, Network, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Cover `[start, base.end())` with maximal aligned CIDR blocks.
///
/// `start` is a 64-bit position so a cursor that has run off the top of the
/// address space yields no blocks.
pub fn leftover_blocks(base: &Network, start: u64) -> Vec<Network> {
    let end = base.end();
    let mut next = start.max(base.start());
    let mut blocks = Vec::new();

    while next < end {
        let mask = find_biggest_block(next, end);
        blocks.push(Network::from_bits(next as u32, mask));
        next += 1u64 << (MAX_LENGTH - mask);
    }

    log::debug!(
        "leftover in {base} from {start}: {} block(s)",
        blocks.len()
    );
    blocks
}

/// Find the shortest prefix for a block starting at `start` that ends at or
/// before `end`.
///
/// The returned mask is constrained by:
/// 1. The alignment of `start` - it must be a valid network address for the mask
/// 2. The block must not run past `end`
fn find_biggest_block(start: u64, end: u64) -> u8 {
    assert!(
        start < end && end <= 1u64 << MAX_LENGTH,
        "start[{start}] end[{end}] should never happen."
    );

    let mut mask = lo_mask(Ipv4Addr::from(start as u32));
    while start + (1u64 << (MAX_LENGTH - mask)) > end {
        mask += 1;
    }

    assert!(mask <= MAX_LENGTH, "mask[{mask}] > 32 should never happen.");
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(ip: [u8; 4]) -> u64 {
        u32::from(Ipv4Addr::from(ip)) as u64
    }

    #[test]
    fn test_find_biggest_block() {
        let end = pos([192, 168, 2, 0]);
        assert_eq!(24, find_biggest_block(pos([192, 168, 1, 0]), end));
        assert_eq!(27, find_biggest_block(pos([192, 168, 1, 160]), end - 64));
        assert_eq!(26, find_biggest_block(pos([192, 168, 1, 192]), end));

        // 10.6.2.80 can only be /28 or smaller due to alignment
        assert_eq!(28, find_biggest_block(pos([10, 6, 2, 80]), pos([10, 6, 8, 0])));

        assert_eq!(0, find_biggest_block(0, 1 << 32));
        assert_eq!(32, find_biggest_block(pos([10, 0, 0, 1]), pos([10, 0, 0, 2])));
    }

    #[test]
    fn test_leftover_after_vlsm() {
        // 192.168.1.0/24 after .0/25, .128/27 and .160/29 were carved
        let base = Network::parse("192.168.1.0/24").unwrap();
        let blocks = leftover_blocks(&base, pos([192, 168, 1, 168]));
        let blocks: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            blocks,
            vec!["192.168.1.168/29", "192.168.1.176/28", "192.168.1.192/26"]
        );
    }

    #[test]
    fn test_leftover_blocks_sum() {
        let base = Network::parse("10.0.0.0/16").unwrap();
        for offset in [0u64, 1, 3, 100, 4097, 65535] {
            let start = base.start() + offset;
            let blocks = leftover_blocks(&base, start);
            let total: u64 = blocks.iter().map(|b| b.num_addresses()).sum();
            assert_eq!(total, base.num_addresses() - offset);
            assert_eq!(blocks.first().map(|b| b.start()), Some(start));
            for pair in blocks.windows(2) {
                assert_eq!(pair[0].end(), pair[1].start());
            }
        }
    }

    #[test]
    fn test_leftover_empty() {
        let base = Network::parse("10.0.0.0/30").unwrap();
        assert!(leftover_blocks(&base, base.end()).is_empty());

        let top = Network::parse("255.255.255.0/24").unwrap();
        assert!(leftover_blocks(&top, 1 << 32).is_empty());
    }

    #[test]
    fn test_leftover_untouched_base() {
        let base = Network::parse("172.16.0.0/12").unwrap();
        assert_eq!(leftover_blocks(&base, base.start()), vec![base]);
    }
}
