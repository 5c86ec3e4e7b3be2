//! Input bus lifecycle tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::input::{InputBus, Subscription};

#[test]
fn test_dispatch_reaches_all_subscribers_in_order() {
    let bus: InputBus<u8> = InputBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let l1 = Rc::clone(&log);
    let _a = bus.subscribe(move |e| l1.borrow_mut().push(("a", *e)));
    let l2 = Rc::clone(&log);
    let _b = bus.subscribe(move |e| l2.borrow_mut().push(("b", *e)));

    assert_eq!(bus.dispatch(&7), 2);
    assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn test_dropping_subscription_releases_handler() {
    let bus: InputBus<u8> = InputBus::new();
    let hits = Rc::new(Cell::new(0));

    let h = Rc::clone(&hits);
    let sub = bus.subscribe(move |_| h.set(h.get() + 1));
    bus.dispatch(&1);
    assert_eq!(bus.subscriber_count(), 1);

    drop(sub);
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.dispatch(&1), 0);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_repeated_subscribe_cycles_do_not_accumulate() {
    let bus: InputBus<u8> = InputBus::new();
    for _ in 0..50 {
        let _sub = bus.subscribe(|_| {});
        assert_eq!(bus.subscriber_count(), 1);
    }
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_handler_may_drop_its_own_subscription() {
    let bus: InputBus<u8> = InputBus::new();
    let slot: Rc<RefCell<Option<Subscription<u8>>>> = Rc::new(RefCell::new(None));
    let hits = Rc::new(Cell::new(0));

    let slot_in = Rc::clone(&slot);
    let h = Rc::clone(&hits);
    let sub = bus.subscribe(move |_| {
        h.set(h.get() + 1);
        slot_in.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    bus.dispatch(&1);
    bus.dispatch(&1);
    assert_eq!(hits.get(), 1);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_reentrant_dispatch_skips_running_handler() {
    let bus: InputBus<u8> = InputBus::new();
    let hits = Rc::new(Cell::new(0));

    let inner_bus = bus.clone();
    let h = Rc::clone(&hits);
    let _sub = bus.subscribe(move |e| {
        h.set(h.get() + 1);
        if *e == 0 {
            assert_eq!(inner_bus.dispatch(&1), 0);
        }
    });

    assert_eq!(bus.dispatch(&0), 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_subscription_outliving_bus_is_harmless() {
    let bus: InputBus<u8> = InputBus::new();
    let sub = bus.subscribe(|_| {});
    assert!(sub.is_attached());
    drop(bus);
    assert!(!sub.is_attached());
    drop(sub);
}
