use proptest::prelude::*;
use ringdeque::{EmptyError, RingDeque};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    PeekFront,
    PeekBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        Just(Op::PeekFront),
        Just(Op::PeekBack),
    ]
}

proptest! {
    // Mirror every operation against a VecDeque with a manual capacity
    // gate; size, order, and full/empty state must agree after each step.
    #[test]
    fn test_matches_vecdeque_oracle(
        capacity in 1usize..16,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut deque = RingDeque::with_capacity(capacity);
        let mut oracle: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    let inserted = deque.offer_front(v);
                    prop_assert_eq!(inserted, oracle.len() < capacity);
                    if inserted {
                        oracle.push_front(v);
                    }
                }
                Op::PushBack(v) => {
                    let inserted = deque.offer_back(v);
                    prop_assert_eq!(inserted, oracle.len() < capacity);
                    if inserted {
                        oracle.push_back(v);
                    }
                }
                Op::PopFront => prop_assert_eq!(deque.pop_front(), oracle.pop_front()),
                Op::PopBack => prop_assert_eq!(deque.pop_back(), oracle.pop_back()),
                Op::PeekFront => prop_assert_eq!(deque.front(), oracle.front()),
                Op::PeekBack => prop_assert_eq!(deque.back(), oracle.back()),
            }
            prop_assert_eq!(deque.len(), oracle.len());
            prop_assert_eq!(deque.is_empty(), oracle.is_empty());
            prop_assert_eq!(deque.is_full(), oracle.len() == capacity);
        }
        prop_assert_eq!(deque.to_vec(), oracle.iter().copied().collect::<Vec<_>>());
    }

    // Alternating insert/remove pairs sweep the indices across the buffer
    // seam many times; order and emptiness must hold on every cycle.
    #[test]
    fn test_wraparound_cycles(capacity in 1usize..8, cycles in 1usize..64) {
        let mut deque = RingDeque::with_capacity(capacity);
        for i in 0..cycles {
            prop_assert!(deque.offer_back(i));
            prop_assert_eq!(deque.len(), 1);
            prop_assert_eq!(deque.pop_front(), Some(i));
            prop_assert!(deque.is_empty());
        }
    }

    // Exactly `capacity` insertions fit; the next strict one hands the
    // element back, the next permissive one reports false.
    #[test]
    fn test_capacity_boundary(capacity in 1usize..32, extra in 0i32..100) {
        let mut deque = RingDeque::with_capacity(capacity);
        for i in 0..capacity as i32 {
            prop_assert!(deque.push_back(i).is_ok());
        }
        prop_assert!(deque.is_full());
        prop_assert_eq!(deque.len(), capacity);

        let err = deque.push_back(extra).unwrap_err();
        prop_assert_eq!(err.capacity, capacity);
        prop_assert_eq!(err.element, extra);
        prop_assert!(!deque.offer_back(extra));
        prop_assert!(!deque.offer_front(extra));
        prop_assert_eq!(deque.len(), capacity);
    }

    // addLast(1..n) then n pollFirst calls yields 1..n; addFirst(1..n)
    // then n pollFirst calls yields n..1.
    #[test]
    fn test_fifo_lifo_duality(n in 1usize..32) {
        let mut fifo = RingDeque::with_capacity(n);
        for i in 1..=n {
            fifo.push_back(i).unwrap();
        }
        for i in 1..=n {
            prop_assert_eq!(fifo.pop_front(), Some(i));
        }

        let mut lifo = RingDeque::with_capacity(n);
        for i in 1..=n {
            lifo.push_front(i).unwrap();
        }
        for i in (1..=n).rev() {
            prop_assert_eq!(lifo.pop_front(), Some(i));
        }
    }

    // The strict and permissive families observe identical state: run the
    // same drained sequence through both and compare results.
    #[test]
    fn test_strict_permissive_agree(values in prop::collection::vec(any::<i16>(), 0..40)) {
        let mut strict = RingDeque::with_capacity(values.len().max(1));
        let mut permissive = strict.clone();
        for &v in &values {
            strict.push_back(v).unwrap();
            prop_assert!(permissive.offer_back(v));
        }
        prop_assert_eq!(&strict, &permissive);

        loop {
            match (strict.remove_front(), permissive.pop_front()) {
                (Ok(a), Some(b)) => prop_assert_eq!(a, b),
                (Err(EmptyError), None) => break,
                (a, b) => prop_assert!(false, "families disagree: {:?} vs {:?}", a, b),
            }
        }
    }

    // Display and to_vec always present the same linearization.
    #[test]
    fn test_display_matches_export(
        capacity in 1usize..10,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut deque = RingDeque::with_capacity(capacity);
        for op in ops {
            match op {
                Op::PushFront(v) => {
                    deque.offer_front(v);
                }
                Op::PushBack(v) => {
                    deque.offer_back(v);
                }
                Op::PopFront => {
                    deque.pop_front();
                }
                Op::PopBack => {
                    deque.pop_back();
                }
                Op::PeekFront | Op::PeekBack => {}
            }
        }
        let rendered: String = deque
            .to_vec()
            .iter()
            .map(|v| format!(" {v}"))
            .collect();
        prop_assert_eq!(deque.to_string(), format!("[{rendered} ]"));
    }

    // Serde linearizes like to_vec and survives a round trip.
    #[test]
    fn test_serde_round_trip(
        capacity in 1usize..10,
        values in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let mut deque = RingDeque::with_capacity(capacity);
        for v in values {
            if !deque.offer_back(v) {
                deque.pop_front();
                deque.offer_back(v);
            }
        }
        let json = serde_json::to_string(&deque).unwrap();
        let restored: RingDeque<i32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored.to_vec(), deque.to_vec());
    }
}
