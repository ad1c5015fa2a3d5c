use std::error::Error;

/// Renders `err` followed by each of its sources, joined by `": "`.
pub fn chain(err: &dyn Error) -> String {
    let mut description = err.to_string();

    let mut source = err.source();
    while let Some(err) = source {
        description.push_str(": ");
        description.push_str(&err.to_string());
        source = err.source();
    }

    description
}

#[cfg(test)]
mod test {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("request failed")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("client error (Connect)")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn should_join_every_source() {
        let err = Outer(Middle(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));

        pretty_assertions::assert_str_eq!(
            "request failed: client error (Connect): Connection refused",
            chain(&err)
        );
    }

    #[test]
    fn should_be_display_without_sources() {
        let err = std::io::Error::other("boom");

        pretty_assertions::assert_str_eq!("boom", chain(&err));
    }
}
