// helpers.rs: drive a ReaderWriter through its public event interface

use tagrw::protocol::{EngineEvent, T2tEvent};
use tagrw::test_support::Harness;
use tagrw::{ActivationParams, Admission, OperationRequest, RwConfig, RwEvent};

pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Activate `params` and forget the activation traffic.
pub fn activated_with(config: RwConfig, params: ActivationParams) -> Harness {
    init_logger();
    let mut h = Harness::with_config(config);
    h.rw.handle_event(RwEvent::Activate(params));
    h.forget();
    h
}

pub fn activated(params: ActivationParams) -> Harness {
    activated_with(RwConfig::default(), params)
}

pub fn request(h: &mut Harness, request: OperationRequest) -> Admission {
    h.rw.handle_request(request)
}

pub fn engine(h: &mut Harness, event: EngineEvent) {
    h.rw.handle_event(RwEvent::Engine(event));
}

pub fn t2t(h: &mut Harness, event: T2tEvent) {
    engine(h, EngineEvent::T2t(event));
}

/// Fire the presence timer and leave the automatic check in flight.
pub fn tick(h: &mut Harness) {
    h.rw.handle_event(RwEvent::PresenceTick);
    assert!(h.rw.session().auto_presence_check_busy);
}
