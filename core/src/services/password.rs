//! bcrypt password hashing
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of the request's worker thread.

use tokio::task;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("bcrypt hash task: {}", e)))?
            .map_err(|e| DomainError::internal(format!("bcrypt hash: {}", e)))
    }

    /// `Ok(false)` on mismatch; a corrupt stored hash is an internal error
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("bcrypt verify task: {}", e)))?
            .map_err(|e| DomainError::internal(format!("bcrypt verify: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("segredo123").await.unwrap();

        assert_ne!(hash, "segredo123");
        assert!(hasher.verify("segredo123", &hash).await.unwrap());
        assert!(!hasher.verify("errado", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_an_error() {
        assert!(PasswordHasher::new(4)
            .verify("x", "not-a-bcrypt-hash")
            .await
            .is_err());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_hashing_does_not_block_the_runtime_thread() {
        let hasher = PasswordHasher::new(10);
        let ticker = tokio::spawn(async {
            let mut ticks = 0u32;
            for _ in 0..3 {
                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                ticks += 1;
            }
            ticks
        });

        let hash = hasher.hash("segredo123").await.unwrap();

        // The single runtime thread stayed free to drive the ticker meanwhile
        assert!(ticker.is_finished());
        assert_eq!(ticker.await.unwrap(), 3);
        assert!(hasher.verify("segredo123", &hash).await.unwrap());
    }
}
