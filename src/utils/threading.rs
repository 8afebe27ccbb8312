use parking_lot::{Condvar, Mutex};

/// A one-shot gate holding workers back until every one of them is spawned
#[derive(Debug, Default)]
pub struct StartGate {
    open: Mutex<bool>,
    cvar: Condvar,
}

impl StartGate {
    pub fn new() -> Self {
        StartGate {
            open: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }

    /// Blocks until the gate is opened
    pub fn wait(&self) {
        let mut open = self.open.lock();
        while !*open {
            self.cvar.wait(&mut open);
        }
    }

    pub fn open(&self) {
        let mut open = self.open.lock();
        *open = true;
        self.cvar.notify_all();
    }
}
