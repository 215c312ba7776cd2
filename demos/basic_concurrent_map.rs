use std::sync::Arc;
use std::thread;

use leafkit::ds::ConcurrentMap;
use leafkit::hash::ObjectIdGenerator;

fn main() {
    let sessions: Arc<ConcurrentMap<String, u32>> = Arc::new(ConcurrentMap::new());
    let ids = Arc::new(ObjectIdGenerator::new());

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let sessions = sessions.clone();
            let ids = ids.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    sessions.put(ids.next_id().to_string(), worker);
                }
                sessions.put_if_absent("leader".to_string(), worker);
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    println!("sessions: {}", sessions.size());
    println!("leader elected: {}", sessions.contains_key("leader"));
    println!("inserts: {}", sessions.metrics().inserts);
}

// Expected output:
// sessions: 101
// leader elected: true
// inserts: 101
//
// Explanation: every ObjectId is unique, so the 100 session puts are all
// inserts; only one of the four put_if_absent calls wins "leader".
