use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "marquee_flash";

/// One-shot notification carried across a redirect on a cookie, surfaced and
/// cleared by the next home view.
#[derive(Debug, Default)]
pub struct Flash {
    jar: CookieJar,
}

impl Flash {
    pub fn notice(self, message: &str) -> Self {
        Self {
            jar: self.jar.add(
                Cookie::build((FLASH_COOKIE, urlencoding::encode(message).into_owned()))
                    .path("/")
                    .build(),
            ),
        }
    }

    pub fn redirect(self, to: &str) -> (CookieJar, Redirect) {
        (self.jar, Redirect::to(to))
    }

    pub fn take(self) -> (CookieJar, Vec<String>) {
        let notices = self
            .jar
            .get(FLASH_COOKIE)
            .and_then(|cookie| urlencoding::decode(cookie.value()).ok())
            .map(|notice| notice.into_owned())
            .into_iter()
            .collect();
        let jar = self.jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
        (jar, notices)
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        Ok(Self { jar })
    }
}
