//! Service-level tests over the real in-memory store.

use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};

use common::AppError;
use domain::{HashCost, PasswordHasher};
use user_service_lib::repository::MemoryUserStore;
use user_service_lib::service::{UserManager, UserService};

fn manager() -> (Arc<MemoryUserStore>, UserManager) {
    let store = Arc::new(MemoryUserStore::new());
    let hasher = Arc::new(PasswordHasher::new(HashCost::new(8, 1, 1)).unwrap());
    let manager = UserManager::new(store.clone(), hasher);
    (store, manager)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_all_stored() {
    const USERS: usize = 50;
    let (store, manager) = manager();
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..USERS)
        .map(|i| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move {
                manager
                    .register(format!("user{}@example.com", i), "password123".to_string())
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }

    assert_eq!(store.len().unwrap(), USERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_email_single_winner() {
    let (store, manager) = manager();
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move {
                manager
                    .register("same@example.com".to_string(), "password123".to_string())
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, AppError::Conflict(_))),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let (store, manager) = manager();

    let user = manager
        .register("life@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();
    assert_ok!(manager.authenticate("life@example.com", "password123".to_string()).await);

    let updated = manager
        .update_user(user.id, Some("moved@example.com".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.email, "moved@example.com");
    assert_err!(manager.get_user_by_email("life@example.com").await);
    assert_ok!(manager.authenticate("moved@example.com", "password123".to_string()).await);

    assert_ok!(manager.delete_user(user.id).await);
    assert!(store.is_empty().unwrap());
    assert!(matches!(
        manager.get_user(user.id).await,
        Err(AppError::NotFound)
    ));
}
