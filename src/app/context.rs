use crate::domain::ResolverConfig;
use crate::ports::{
    AuthorizationPolicy, HomePathDeriver, IdentityContext, RepositoryGateway, SettingsStore,
};

/// Collaborators and configuration a resolution runs against.
///
/// Every port is also implemented for shared references, so one adapter can
/// fill several roles: `ResolverContext::new(config, &catalog, &catalog, ..)`.
pub struct ResolverContext<R, A, S, H, I>
where
    R: RepositoryGateway,
    A: AuthorizationPolicy,
    S: SettingsStore,
    H: HomePathDeriver,
    I: IdentityContext,
{
    config: ResolverConfig,
    repository: R,
    authorization: A,
    settings: S,
    home: H,
    identity: I,
}

impl<R, A, S, H, I> ResolverContext<R, A, S, H, I>
where
    R: RepositoryGateway,
    A: AuthorizationPolicy,
    S: SettingsStore,
    H: HomePathDeriver,
    I: IdentityContext,
{
    /// Create a new resolver context.
    pub fn new(
        config: ResolverConfig,
        repository: R,
        authorization: A,
        settings: S,
        home: H,
        identity: I,
    ) -> Self {
        Self { config, repository, authorization, settings, home, identity }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Get a reference to the repository gateway.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn authorization(&self) -> &A {
        &self.authorization
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn home(&self) -> &H {
        &self.home
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }
}
