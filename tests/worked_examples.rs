//! End-to-end scenarios across lists, streams, pattern dispatch and the
//! derived monads.

#![cfg(all(feature = "control", feature = "persistent", feature = "effect"))]

use std::cell::Cell;
use std::rc::Rc;

use monadkit::AdtError;
use monadkit::control::{Continuation, Maybe};
use monadkit::effect::{Reader, State, Tree, Writer};
use monadkit::persistent::{List, Stream, cons, empty};
use monadkit::variant::{Pattern, SequenceTag, Variant};
use rstest::rstest;

// =============================================================================
// Lists
// =============================================================================

#[rstest]
fn string_to_char_list() {
    assert_eq!(List::from_string("abc").to_vec(), vec!['a', 'b', 'c']);
}

#[rstest]
fn four_element_list() {
    let list = cons(1, &cons(2, &cons(3, &cons(4, &empty()))));
    assert_eq!(list.len(), 4);
    assert_eq!(list.length_by_fold(), 4);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn list_flat_map_mirrors() {
    let list: List<i32> = (1..=3).collect();
    let mirrored = list.flat_map(|x| List::from_iter([x, -x]));
    assert_eq!(mirrored.to_vec(), vec![1, -1, 2, -2, 3, -3]);
}

#[rstest]
fn list_at_reports_invalid_index() {
    let list: List<char> = List::from_string("xyz");
    assert_eq!(list.at(2), Ok(&'z'));
    assert_eq!(list.at(3), Err(AdtError::InvalidIndex { index: 3, length: 3 }));
}

#[rstest]
fn concat_of_empty_is_empty() {
    let nested: List<List<i32>> = List::new();
    assert!(nested.concat().is_empty());
}

// =============================================================================
// Streams
// =============================================================================

fn ones() -> Stream<i32> {
    Stream::cons(1, ones)
}

#[rstest]
fn ones_is_self_referential() {
    let stream = ones();
    assert_eq!(stream.head(), Some(&1));
    assert_eq!(stream.tail().and_then(|tail| tail.head().copied()), Some(1));
}

#[rstest]
fn take_from_integers() {
    assert_eq!(Stream::integers_from(1).take(4).to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn first_ten_primes_by_filter() {
    let is_prime = |n: &i64| *n > 1 && (2..*n).take_while(|k| k * k <= *n).all(|k| n % k != 0);
    let primes = Stream::integers_from(1).filter(is_prime);
    assert_eq!(
        primes.take(10).to_vec(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[rstest]
fn stream_tails_are_forced_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let stream = Stream::cons(0, move || {
        counter.set(counter.get() + 1);
        Stream::unit(1)
    });
    let copy = stream.clone();
    assert_eq!(stream.tail().map(|tail| tail.to_vec()), Some(vec![1]));
    assert_eq!(copy.tail().map(|tail| tail.to_vec()), Some(vec![1]));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn flat_map_over_infinite_stream_is_productive() {
    let pairs = Stream::integers_from(1).flat_map(|n| Stream::from_list(&List::from_iter([n, -n])));
    assert_eq!(pairs.take(6).to_vec(), vec![1, -1, 2, -2, 3, -3]);
}

// =============================================================================
// Pattern dispatch
// =============================================================================

#[rstest]
fn pattern_without_cons_handler_fails_on_cons() {
    let list: List<i32> = (1..=2).collect();
    let pattern = Pattern::<List<i32>, i32>::new().on_empty(|| 0);
    assert!(!pattern.is_exhaustive());
    assert_eq!(
        pattern.apply(&list),
        Err(AdtError::NonExhaustiveMatch {
            type_name: std::any::type_name::<List<i32>>(),
            tag: "cons",
        })
    );
}

#[rstest]
fn recursive_sum_through_pattern() {
    fn sum(list: &List<i32>) -> Result<i32, AdtError> {
        Pattern::<List<i32>, Result<i32, AdtError>>::new()
            .on_empty(|| Ok(0))
            .on_cons(|head, tail| Ok(head + sum(&tail)?))
            .apply(list)?
    }
    let list: List<i32> = (1..=10).collect();
    assert_eq!(sum(&list), Ok(55));
}

#[rstest]
fn stream_and_list_share_tags() {
    assert_eq!(List::<i32>::new().tag(), SequenceTag::Empty);
    assert_eq!(Stream::unit(1).tag(), SequenceTag::Cons);
}

#[rstest]
fn maybe_pattern_dispatch() {
    let describe = |maybe: &Maybe<i32>| {
        Pattern::<Maybe<i32>, String>::new()
            .on_just(|value| format!("just {value}"))
            .on_nothing(|| "nothing".to_string())
            .apply(maybe)
    };
    assert_eq!(describe(&Maybe::just(3)), Ok("just 3".to_string()));
    assert_eq!(describe(&Maybe::nothing()), Ok("nothing".to_string()));
}

// =============================================================================
// Derived monads
// =============================================================================

#[rstest]
fn reader_adds_ten() {
    let reader: Reader<i32, i32> = Reader::ask().flat_map(|x| Reader::unit(x + 10));
    assert_eq!(reader.run(1), 11);
}

fn factorial(n: u64) -> Writer<List<u64>, u64> {
    if n == 0 {
        Writer::tell_entry(0).then(Writer::unit(1))
    } else {
        Writer::tell_entry(n)
            .then(factorial(n - 1))
            .fmap(move |rest| n * rest)
    }
}

#[rstest]
fn writer_factorial() {
    let (value, log) = factorial(5).run();
    assert_eq!(value, 120);
    assert_eq!(log.to_vec(), vec![5, 4, 3, 2, 1, 0]);
}

#[rstest]
fn continuation_pythagoras() {
    let square = |n: i64| Continuation::<i64, i64>::unit(n * n);
    let pythagoras = square(2).flat_map(move |a| square(3).flat_map(move |b| Continuation::unit(a + b)));
    assert_eq!(pythagoras.eval(), 13);
    assert_eq!(square(3).run(|n| n), 9);
}

#[rstest]
fn continuation_early_exit_in_search() {
    fn first_negative(values: List<i32>) -> Continuation<Maybe<i32>, Maybe<i32>> {
        Continuation::call_cc(move |exit| {
            values.foldl(Continuation::unit(Maybe::nothing()), |accumulated, value| {
                let value = *value;
                let exit = Rc::clone(&exit);
                accumulated.flat_map(move |found| {
                    if value < 0 {
                        exit(Maybe::just(value))
                    } else {
                        Continuation::unit(found)
                    }
                })
            })
        })
    }
    let values: List<i32> = List::from_iter([3, 1, -4, 1, -5]);
    assert_eq!(first_negative(values).eval(), Maybe::just(-4));
    assert_eq!(first_negative(List::from_iter([1, 2])).eval(), Maybe::nothing());
}

#[rstest]
fn tree_labelling_with_state() {
    let tree = Tree::node(Tree::leaf("a"), Tree::node(Tree::leaf("b"), Tree::leaf("c")));
    let (labelled, next) = tree.label().run(0);
    assert_eq!(labelled.to_string(), "[0, [1, 2]]");
    assert_eq!(next, 3);
}

#[rstest]
fn state_fresh_counter() {
    let three = State::<u8, u8>::fresh()
        .then(State::fresh())
        .then(State::fresh());
    assert_eq!(three.run(0), (2, 3));
}
