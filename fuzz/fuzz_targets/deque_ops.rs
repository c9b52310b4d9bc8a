#![no_main]

use libfuzzer_sys::fuzz_target;
use ringdeque::RingDeque;
use std::collections::VecDeque;

// Drive the deque from a raw byte stream against a VecDeque oracle with a
// manual capacity gate. The first byte picks the capacity; each following
// byte pair is an opcode plus payload.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(first % 16) + 1;

    let mut deque: RingDeque<u8> = RingDeque::with_capacity(capacity);
    let mut oracle: VecDeque<u8> = VecDeque::new();

    for chunk in rest.chunks(2) {
        let op = chunk[0] % 6;
        let val = chunk.get(1).copied().unwrap_or(0);
        match op {
            0 => {
                let fits = oracle.len() < capacity;
                assert_eq!(deque.offer_back(val), fits);
                if fits {
                    oracle.push_back(val);
                }
            }
            1 => {
                let fits = oracle.len() < capacity;
                assert_eq!(deque.offer_front(val), fits);
                if fits {
                    oracle.push_front(val);
                }
            }
            2 => assert_eq!(deque.pop_front(), oracle.pop_front()),
            3 => assert_eq!(deque.pop_back(), oracle.pop_back()),
            4 => assert_eq!(deque.front(), oracle.front()),
            _ => assert_eq!(deque.back(), oracle.back()),
        }
        assert_eq!(deque.len(), oracle.len());
        assert_eq!(deque.is_empty(), oracle.is_empty());
        assert_eq!(deque.is_full(), oracle.len() == capacity);
    }

    assert_eq!(deque.to_vec(), oracle.iter().copied().collect::<Vec<_>>());
});
