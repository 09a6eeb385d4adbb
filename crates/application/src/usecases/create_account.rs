//! Account creation use case implementation.

use async_trait::async_trait;
use domain::auth::password::Password;
use domain::error::DomainError;
use domain::identity::account::Account;
use domain::identity::login::Login;
use domain::identity::name::FullName;

use crate::dto::{AccountDto, CreateAccountRequestDto};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::CreateAccount;
use crate::ports::outbound::{AccountRepository, PasswordHasher, TelemetryPort};

/// Account creation use case service.
pub struct CreateAccountUseCase {
    account_repo: Box<dyn AccountRepository>,
    password_hasher: Box<dyn PasswordHasher>,
    telemetry: Box<dyn TelemetryPort>,
}

impl CreateAccountUseCase {
    pub fn new(
        account_repo: Box<dyn AccountRepository>,
        password_hasher: Box<dyn PasswordHasher>,
        telemetry: Box<dyn TelemetryPort>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            telemetry,
        }
    }

    /// Name rules come first, then password rules.
    fn validate(
        request: CreateAccountRequestDto,
    ) -> std::result::Result<(FullName, Password), DomainError> {
        let full_name = FullName::parse(request.full_name)?;
        let password = Password::new(request.password)?;

        Ok((full_name, password))
    }

    /// Returns the first login proposal no account holds yet.
    async fn generate_login(&self, full_name: &FullName) -> Result<Login> {
        let candidates = full_name.login_candidates().ok_or(
            ApplicationError::InvariantViolation(
                "full name has no tokens to derive a login from",
            ),
        )?;

        for candidate in candidates {
            if self.account_repo.find_by_login(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            self.telemetry.record_login_taken(candidate.as_str());
        }

        Err(ApplicationError::InvariantViolation(
            "login suffixes are exhausted",
        ))
    }
}

#[async_trait]
impl CreateAccount for CreateAccountUseCase {
    async fn execute(
        &self,
        request: CreateAccountRequestDto,
    ) -> Result<Account> {
        let (full_name, password) = match Self::validate(request) {
            Ok(validated) => validated,
            Err(err) => {
                self.telemetry.record_account_rejected(&err.to_string());
                return Err(err.into());
            },
        };

        let login = self.generate_login(&full_name).await?;
        let password_hash = self.password_hasher.hash(&password)?;

        let account =
            Account::new(login.clone(), password_hash, full_name.as_str());
        self.account_repo
            .insert(&AccountDto::from(&account))
            .await?;

        // The repository holds the canonical record.
        let stored = self
            .account_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| ApplicationError::AccountNotPersisted {
                login: login.to_string(),
            })?
            .try_into_account()?;

        self.telemetry.record_account_created(login.as_str());

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use domain::auth::password::PasswordHash;

    use super::*;

    /// Map backed repository recording every call.
    #[derive(Default)]
    struct FakeRepository {
        accounts: Mutex<HashMap<String, AccountDto>>,
        lookups: Mutex<Vec<String>>,
        inserts: Mutex<Vec<String>>,
        /// Lookups never find anything while inserts still see duplicates.
        blind: bool,
        /// Lookups fail.
        broken: bool,
    }

    impl FakeRepository {
        fn seed(self, logins: &[&str]) -> Self {
            {
                let mut accounts = self.accounts.lock().unwrap();
                for login in logins {
                    accounts.insert(
                        login.to_string(),
                        AccountDto {
                            login: login.to_string(),
                            password_hash: "0".repeat(64),
                            full_name: "Someone Else".into(),
                        },
                    );
                }
            }
            self
        }

        fn contains(&self, login: &str) -> bool {
            self.accounts.lock().unwrap().contains_key(login)
        }

        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }

        fn inserts(&self) -> Vec<String> {
            self.inserts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AccountRepository for Arc<FakeRepository> {
        async fn find_by_login(
            &self,
            login: &Login,
        ) -> Result<Option<AccountDto>> {
            self.lookups.lock().unwrap().push(login.to_string());

            if self.broken {
                return Err(ApplicationError::repository(
                    std::io::Error::other("connection reset"),
                ));
            }
            if self.blind {
                return Ok(None);
            }

            Ok(self.accounts.lock().unwrap().get(login.as_str()).cloned())
        }

        async fn insert(&self, account: &AccountDto) -> Result<()> {
            self.inserts.lock().unwrap().push(account.login.clone());

            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(&account.login) {
                return Err(ApplicationError::DuplicateLogin {
                    login: account.login.clone(),
                });
            }
            accounts.insert(account.login.clone(), account.clone());

            Ok(())
        }
    }

    /// Reversible stand-in, good enough to tell hashes apart.
    struct HexHasher;

    impl PasswordHasher for HexHasher {
        fn hash(&self, password: &Password) -> Result<PasswordHash> {
            let digest = format!("{:0<64}", hex::encode(password.as_bytes()));
            Ok(PasswordHash::parse(digest)?)
        }
    }

    #[derive(Default)]
    struct RecordingTelemetry {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl TelemetryPort for RecordingTelemetry {
        fn record_account_created(&self, login: &str) {
            self.events.lock().unwrap().push(format!("created {login}"));
        }

        fn record_account_rejected(&self, reason: &str) {
            self.events.lock().unwrap().push(format!("rejected {reason}"));
        }

        fn record_login_taken(&self, login: &str) {
            self.events.lock().unwrap().push(format!("taken {login}"));
        }
    }

    fn use_case(repo: &Arc<FakeRepository>) -> CreateAccountUseCase {
        CreateAccountUseCase::new(
            Box::new(Arc::clone(repo)),
            Box::new(HexHasher),
            Box::new(RecordingTelemetry::default()),
        )
    }

    async fn create(
        repo: &Arc<FakeRepository>,
        full_name: &str,
        password: &str,
    ) -> Result<Account> {
        use_case(repo)
            .execute(CreateAccountRequestDto::new(full_name, password))
            .await
    }

    #[tokio::test]
    async fn test_create_account() {
        let repo = Arc::new(FakeRepository::default());
        assert!(!repo.contains("ana.maria"));

        let account = create(&repo, "Ana Maria Silva", "abc123").await.unwrap();

        assert_eq!(account.login().as_str(), "ana.maria");
        assert_eq!(account.full_name(), "Ana Maria Silva");
        assert_eq!(
            account.password_hash(),
            &HexHasher.hash(&Password::new("abc123").unwrap()).unwrap()
        );
        assert!(repo.contains("ana.maria"));

        // One probe, one insert, one confirmation read.
        assert_eq!(repo.lookups(), ["ana.maria", "ana.maria"]);
        assert_eq!(repo.inserts(), ["ana.maria"]);
    }

    #[tokio::test]
    async fn test_reject_single_token_name() {
        let repo = Arc::new(FakeRepository::default());

        let err = create(&repo, "Ana", "abc123").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidArgument(DomainError::InvalidFullName { .. })
        ));
        assert!(repo.lookups().is_empty());
        assert!(repo.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_reject_password_without_digit() {
        let repo = Arc::new(FakeRepository::default());

        let err = create(&repo, "Ana Maria Silva", "abcdef").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidArgument(
                DomainError::InvalidPasswordCharacters
            )
        ));
        assert!(repo.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_reject_invalid_passwords() {
        let repo = Arc::new(FakeRepository::default());

        for password in ["ab1", "abcdefghij123456", "123456", "abc 123", "abc_123"]
        {
            let err = create(&repo, "Ana Maria Silva", password)
                .await
                .unwrap_err();
            assert!(
                matches!(err, ApplicationError::InvalidArgument(_)),
                "{password} should be rejected"
            );
        }
        assert!(repo.lookups().is_empty());
        assert!(repo.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_name_is_checked_before_password() {
        let repo = Arc::new(FakeRepository::default());

        let err = create(&repo, "Ana", "!").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidArgument(DomainError::InvalidFullName { .. })
        ));
        assert_eq!(
            err.to_string(),
            "full name is required, must be between 5 and 120 characters and \
             must include a surname"
        );
    }

    #[tokio::test]
    async fn test_rejection_is_recorded() {
        let repo = Arc::new(FakeRepository::default());
        let telemetry = RecordingTelemetry::default();
        let events = Arc::clone(&telemetry.events);
        let use_case = CreateAccountUseCase::new(
            Box::new(Arc::clone(&repo)),
            Box::new(HexHasher),
            Box::new(telemetry),
        );

        let request = CreateAccountRequestDto::new("Ana Maria Silva", "abc");
        assert!(use_case.execute(request).await.is_err());

        assert_eq!(
            *events.lock().unwrap(),
            ["rejected password is required and must be between 6 and 15 \
              characters"]
        );
    }

    #[tokio::test]
    async fn test_login_strips_diacritics() {
        let repo = Arc::new(FakeRepository::default());

        let account = create(&repo, "João Távora", "abc123").await.unwrap();
        assert_eq!(account.login().as_str(), "joao.tavora");
        assert_eq!(account.full_name(), "João Távora");
    }

    #[tokio::test]
    async fn test_login_skips_stopwords() {
        let repo = Arc::new(FakeRepository::default());

        let account = create(&repo, "Maria de Souza", "abc123").await.unwrap();
        assert_eq!(account.login().as_str(), "maria.souza");
    }

    #[tokio::test]
    async fn test_login_collisions() {
        let repo = Arc::new(FakeRepository::default().seed(&["joao.paulo"]));
        let account = create(&repo, "João Paulo Távora", "abc123").await.unwrap();
        assert_eq!(account.login().as_str(), "joao.tavora");

        let repo = Arc::new(
            FakeRepository::default().seed(&["joao.paulo", "joao.tavora"]),
        );
        let account = create(&repo, "João Paulo Távora", "abc123").await.unwrap();
        assert_eq!(account.login().as_str(), "joao.tavora1");

        let repo = Arc::new(FakeRepository::default().seed(&[
            "joao.paulo",
            "joao.tavora",
            "joao.tavora1",
        ]));
        let account = create(&repo, "João Paulo Távora", "abc123").await.unwrap();
        assert_eq!(account.login().as_str(), "joao.tavora2");
        assert_eq!(
            repo.lookups(),
            [
                "joao.paulo",
                "joao.tavora",
                "joao.tavora1",
                "joao.tavora2",
                "joao.tavora2"
            ]
        );
    }

    #[tokio::test]
    async fn test_same_name_twice() {
        let repo = Arc::new(FakeRepository::default());

        let first = create(&repo, "Ana Lima", "abc123").await.unwrap();
        let second = create(&repo, "Ana Lima", "xyz789").await.unwrap();
        let third = create(&repo, "Ana Lima", "xyz789").await.unwrap();

        assert_eq!(first.login().as_str(), "ana.lima");
        assert_eq!(second.login().as_str(), "ana.lima1");
        assert_eq!(third.login().as_str(), "ana.lima2");
        assert_ne!(first.password_hash(), second.password_hash());
        assert_eq!(second.password_hash(), third.password_hash());
    }

    #[tokio::test]
    async fn test_repository_failure_is_propagated() {
        let repo = Arc::new(FakeRepository {
            broken: true,
            ..Default::default()
        });

        let err = create(&repo, "Ana Maria Silva", "abc123").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Repository(_)));
        assert!(repo.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_propagated() {
        let repo = Arc::new(
            FakeRepository {
                blind: true,
                ..Default::default()
            }
            .seed(&["ana.maria"]),
        );

        let err = create(&repo, "Ana Maria Silva", "abc123").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::DuplicateLogin { login } if login == "ana.maria"
        ));
    }

    #[tokio::test]
    async fn test_unconfirmed_insert_is_an_error() {
        let repo = Arc::new(FakeRepository {
            blind: true,
            ..Default::default()
        });

        let err = create(&repo, "Ana Maria Silva", "abc123").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::AccountNotPersisted { login } if login == "ana.maria"
        ));
    }
}
