use std::thread;

/// Spawns a named background thread, logging instead of panicking on failure.
pub fn spawn_named_thread<F>(name: &str, task: F)
where F: FnOnce() + Send + 'static {
    let thread_name = format!("recenter-{name}");

    if let Err(err) = thread::Builder::new().name(thread_name.clone()).spawn(task) {
        tracing::error!(thread = %thread_name, error = %err, "failed to spawn thread");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;
    use std::time::Duration;

    use super::*;

    #[test]
    fn spawn_named_thread_executes_task() {
        let (tx, rx) = channel();

        spawn_named_thread("test-task", move || {
            tx.send(true).unwrap();
        });

        assert!(rx.recv_timeout(Duration::from_secs(1)).unwrap());
    }

    #[test]
    fn spawn_named_thread_uses_correct_prefix() {
        let (tx, rx) = channel();

        spawn_named_thread("config-watcher", move || {
            let name = thread::current().name().unwrap_or("").to_string();
            tx.send(name).unwrap();
        });

        let thread_name = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(thread_name, "recenter-config-watcher");
    }
}
