extern crate std;

use core::sync::atomic::{AtomicUsize, Ordering};
use std::format;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::string::String;
use std::vec;
use std::vec::Vec;

use crate::{AsBase, PolyForwardList};

trait Label {
    fn text(&self) -> String;
}

struct First {
    name: String,
}

impl Label for First {
    fn text(&self) -> String {
        self.name.clone()
    }
}

unsafe impl AsBase<dyn Label> for First {
    fn base_ptr(ptr: *mut Self) -> *mut dyn Label {
        ptr
    }
}

#[derive(AsBase)]
#[as_base(dyn Label, crate_path = "crate")]
struct Full {
    first: String,
    last: String,
}

impl Label for Full {
    fn text(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

trait Named {
    fn name(&self) -> String;
}

#[derive(AsBase)]
#[as_base(dyn Label, crate_path = "crate")]
#[as_base(dyn Named, crate_path = "crate")]
struct Both {
    name: String,
}

impl Label for Both {
    fn text(&self) -> String {
        self.name.clone()
    }
}

impl Named for Both {
    fn name(&self) -> String {
        self.name.clone()
    }
}

#[derive(AsBase)]
#[as_base(dyn Label, crate_path = "crate")]
struct Tally {
    name: String,
    drops: &'static AtomicUsize,
}

impl Label for Tally {
    fn text(&self) -> String {
        self.name.clone()
    }
}

impl Drop for Tally {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// A payload that tracks how many instances are alive.
struct Probe {
    value: i32,
    live: &'static AtomicUsize,
}

impl Probe {
    fn new(value: i32, live: &'static AtomicUsize) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Probe { value, live }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

fn values(list: &PolyForwardList<Probe>) -> Vec<i32> {
    list.iter().map(|probe| probe.value).collect()
}

#[test]
fn test_heterogeneous_payloads_behind_one_base() {
    let mut list: PolyForwardList<dyn Label> = PolyForwardList::new();
    let mut tail = list.before_begin();
    unsafe {
        tail = list.insert_after(
            tail,
            First {
                name: "a".into(),
            },
        );
        tail = list.insert_after(
            tail,
            Full {
                first: "b".into(),
                last: "c".into(),
            },
        );
        list.insert_after(
            tail,
            Both {
                name: "d".into(),
            },
        );
    }

    let texts: Vec<String> = list.iter().map(Label::text).collect();
    assert_eq!(texts, vec!["a", "b c", "d"]);
}

#[test]
fn test_derive_with_multiple_bases() {
    let mut labels: PolyForwardList<dyn Label> = PolyForwardList::new();
    labels.push_front(Both { name: "x".into() });
    assert_eq!(labels.front().unwrap().text(), "x");

    let mut names: PolyForwardList<dyn Named> = PolyForwardList::new();
    names.push_front(Both { name: "y".into() });
    assert_eq!(names.front().unwrap().name(), "y");
}

#[test]
fn test_mutation_through_base_references() {
    let mut list: PolyForwardList<dyn Label> = PolyForwardList::new();
    list.push_front(First { name: "a".into() });
    // The iterator hands out the base view; the payload stays concrete.
    for elem in list.iter_mut() {
        assert_eq!(elem.text(), "a");
    }
}

#[test]
fn test_clear_destroys_payloads_through_concrete_type() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<dyn Label> = PolyForwardList::new();
    list.push_front(Tally {
        name: "t1".into(),
        drops: &DROPS,
    });
    list.push_front(First { name: "plain".into() });
    list.push_front(Tally {
        name: "t2".into(),
        drops: &DROPS,
    });

    assert_eq!(DROPS.load(Ordering::SeqCst), 0);
    list.clear();
    assert_eq!(DROPS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_list_drop_destroys_payloads() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    {
        let mut list: PolyForwardList<dyn Label> = PolyForwardList::new();
        list.push_front(Tally {
            name: "t".into(),
            drops: &DROPS,
        });
        assert_eq!(DROPS.load(Ordering::SeqCst), 0);
    }
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_assign_destroys_previous_contents() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<Probe> = (0..3).map(|i| Probe::new(i, &LIVE)).collect();
    assert_eq!(LIVE.load(Ordering::SeqCst), 3);

    list.assign((10..12).map(|i| Probe::new(i, &LIVE)));
    assert_eq!(LIVE.load(Ordering::SeqCst), 2);
    assert_eq!(values(&list), vec![10, 11]);

    drop(list);
    assert_eq!(LIVE.load(Ordering::SeqCst), 0);
}

#[test]
fn test_insert_rollback_on_panicking_source() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<Probe> = (0..3).map(|i| Probe::new(i, &LIVE)).collect();
    let begin = list.begin();

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        list.insert_after_each(
            begin,
            (10..15).map(|i| {
                if i == 13 {
                    panic!("payload construction failed");
                }
                Probe::new(i, &LIVE)
            }),
        );
    }));
    assert!(result.is_err());

    // The three already-built probes were torn down and the list is
    // element-for-element what it was before the call.
    assert_eq!(LIVE.load(Ordering::SeqCst), 3);
    assert_eq!(values(&list), vec![0, 1, 2]);
}

#[test]
fn test_assign_rollback_on_panicking_source() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<Probe> = (0..2).map(|i| Probe::new(i, &LIVE)).collect();

    let result = catch_unwind(AssertUnwindSafe(|| {
        list.assign((0..9).map(|i| {
            if i == 1 {
                panic!("payload construction failed");
            }
            Probe::new(100 + i, &LIVE)
        }));
    }));
    assert!(result.is_err());

    assert_eq!(LIVE.load(Ordering::SeqCst), 2);
    assert_eq!(values(&list), vec![0, 1]);
}

#[test]
fn test_erase_after_destroys_exactly_one() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<Probe> = (0..3).map(|i| Probe::new(i, &LIVE)).collect();
    let begin = list.begin();
    unsafe { list.erase_after(begin) };

    assert_eq!(LIVE.load(Ordering::SeqCst), 2);
    assert_eq!(values(&list), vec![0, 2]);
}

#[test]
fn test_splice_transfers_ownership_without_destroying() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut a: PolyForwardList<Probe> = (0..2).map(|i| Probe::new(i, &LIVE)).collect();
    let mut b: PolyForwardList<Probe> = (10..12).map(|i| Probe::new(i, &LIVE)).collect();
    assert_eq!(LIVE.load(Ordering::SeqCst), 4);

    let before = a.before_begin();
    unsafe { a.splice_after(before, &mut b) };

    assert_eq!(LIVE.load(Ordering::SeqCst), 4);
    assert_eq!(values(&a), vec![10, 11, 0, 1]);
    assert!(b.is_empty());

    drop(a);
    assert_eq!(LIVE.load(Ordering::SeqCst), 0);
}

#[test]
fn test_remove_if_destroys_matches() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);

    let mut list: PolyForwardList<Probe> = (0..5).map(|i| Probe::new(i, &LIVE)).collect();
    let removed = list.remove_if(|probe| probe.value % 2 == 0);

    assert_eq!(removed, 3);
    assert_eq!(LIVE.load(Ordering::SeqCst), 2);
    assert_eq!(values(&list), vec![1, 3]);
}
