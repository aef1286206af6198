pub mod principal;
pub mod token;

pub use principal::PrincipalRepository;
pub use token::RefreshTokenRepository;

#[cfg(test)]
pub use principal::MockPrincipalRepository;
#[cfg(test)]
pub use token::MockRefreshTokenRepository;
