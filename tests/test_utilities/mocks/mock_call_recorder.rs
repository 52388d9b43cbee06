/// Mock handler recorder for testing that captures every invocation
#[derive(Default, Clone)]
pub struct MockCallRecorder {
    pub calls: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCallRecorder {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Records a call under `name` and returns `value` unchanged.
    pub fn record<V: std::fmt::Debug>(&self, name: &str, value: V) -> V {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}({:?})", name, value));
        value
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}
