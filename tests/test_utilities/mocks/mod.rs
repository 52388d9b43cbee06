/// Mock implementations for testing
mod mock_call_recorder;

pub use mock_call_recorder::MockCallRecorder;
