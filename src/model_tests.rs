//! This module is for testing only

use crate::Buffer;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append(u16),
    AppendDefault,
    Set(usize, u16),
    SafeSet(usize, u16),
    SetSome(usize, Vec<u16>),
    SetMultiple(u16, usize, usize),
    Remove(usize),
    RemoveMany(Vec<usize>),
    Merge(Vec<u16>),
    SetLen(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u16>().prop_map(Op::Append),
        Just(Op::AppendDefault),
        (0..64usize, any::<u16>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0..64usize, any::<u16>()).prop_map(|(i, v)| Op::SafeSet(i, v)),
        (0..64usize, prop::collection::vec(any::<u16>(), 0..8)).prop_map(|(s, v)| Op::SetSome(s, v)),
        (any::<u16>(), 0..64usize, 0..8usize).prop_map(|(v, s, n)| Op::SetMultiple(v, s, n)),
        (0..64usize).prop_map(Op::Remove),
        prop::collection::vec(0..64usize, 0..6).prop_map(Op::RemoveMany),
        prop::collection::vec(any::<u16>(), 0..8).prop_map(Op::Merge),
        (0..64usize).prop_map(Op::SetLen),
        Just(Op::Clear),
    ]
}

/// Applies `op` to both, skipping ops whose preconditions do not hold for the model.
fn apply(buffer: &mut Buffer<u16>, model: &mut Vec<u16>, op: Op) {
    match op {
        Op::Append(v) => {
            buffer.append(v);
            model.push(v);
        },
        Op::AppendDefault => {
            buffer.append_default(None);
            model.push(0);
        },
        Op::Set(i, v) => {
            if i < model.len() {
                buffer.set(i, v);
                model[i] = v;
            }
        },
        Op::SafeSet(i, v) => {
            buffer.safe_set(i, v, None);
            if model.len() <= i {
                model.resize(i + 1, 0);
            }
            model[i] = v;
        },
        Op::SetSome(start, values) => {
            buffer.set_some(start, &values);
            let end = start + values.len();
            if model.len() < end {
                model.resize(end, 0);
            }
            model[start..end].copy_from_slice(&values);
        },
        Op::SetMultiple(v, start, repeat) => {
            if start + repeat <= model.len() {
                buffer.set_multiple(v, start, repeat);
                for slot in &mut model[start..start + repeat] {
                    *slot = v;
                }
            }
        },
        Op::Remove(i) => {
            if i < model.len() {
                buffer.remove(i);
                model.remove(i);
            }
        },
        Op::RemoveMany(mut indices) => {
            indices.retain(|i| *i < model.len());
            indices.sort_unstable();
            indices.dedup();
            buffer.remove_many(&indices);
            for i in indices.into_iter().rev() {
                model.remove(i);
            }
        },
        Op::Merge(values) => {
            let mut other = Buffer::new();
            for v in &values {
                other.append(*v);
            }
            buffer.merge(&other);
            model.extend_from_slice(&values);
        },
        Op::SetLen(len) => {
            buffer.set_len(len);
            model.resize(len, 0);
        },
        Op::Clear => {
            buffer.clear();
            model.clear();
        },
    }
}

proptest! {
    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut buffer = Buffer::new();
        let mut model = Vec::new();
        for op in ops {
            let capacity = buffer.capacity();
            apply(&mut buffer, &mut model, op);
            prop_assert_eq!(&model[..], buffer.as_slice());
            prop_assert!(buffer.len() <= buffer.capacity());
            if buffer.capacity() != capacity {
                prop_assert!(buffer.capacity() >= buffer.len());
                prop_assert!(buffer.capacity() >= capacity * 2);
            }
        }
    }

    #[test]
    fn clone_survives_mutation_of_source(values in prop::collection::vec(any::<u16>(), 1..32)) {
        let mut source = Buffer::new();
        for v in &values {
            source.append(*v);
        }
        let copy = source.clone();
        source.set_multiple(!values[0], 0, values.len());
        source.destroy();
        prop_assert_eq!(&values[..], copy.as_slice());
    }

    #[test]
    fn remove_many_matches_simultaneous_removal(
        len in 1..32usize,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut buffer = Buffer::new();
        for v in 0..len as u16 {
            buffer.append(v);
        }
        let mut indices: Vec<usize> = picks.iter().map(|p| p.index(len)).collect();
        indices.sort_unstable();
        indices.dedup();
        indices.reverse();

        buffer.remove_many(&indices);

        let expected: Vec<u16> = (0..len)
            .filter(|i| !indices.contains(i))
            .map(|i| i as u16)
            .collect();
        prop_assert_eq!(&expected[..], buffer.as_slice());
    }
}
