use crate::domain::merchant::MerchantDefinition;
use crate::domain::network::Network;
use crate::domain::ports::RegistrySource;
use crate::domain::registry::MerchantRegistry;
use crate::error::Result;

const CRYPTOQR_DOMAIN: &str = "cryptoqr.net";
const CRYPTOQR_STAGING_DOMAIN: &str = "staging.cryptoqr.net";

/// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029).
///
/// The `regex` crate's `.` only stops at `\n`.
const LINE_CHAR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// `(id, pattern body)` for every merchant routed through CryptoQR.
///
/// Bodies are wrapped in a case-insensitive `identifier` group. Digits are
/// spelled `[0-9]` since `\d` matches any Unicode digit, and `.` is narrowed
/// to [`LINE_CHAR`] when the pattern is built.
const CRYPTOQR_MERCHANTS: &[(&str, &str)] = &[
    ("picknpay", r".*za\.co\.electrum\.picknpay.*"),
    ("ecentric", r".*za\.co\.ecentric.*"),
    ("yoyo", r".*(wigroup\.co|yoyogroup\.co).*"),
    ("zapper", r".*(zapper\.com|[0-9]+\.zap\.pe).*"),
    ("payat", r".*payat\.io.*"),
    ("paynow-netcash", r".*paynow\.netcash\.co\.za.*"),
    ("paynow-sagepay", r".*paynow\.sagepay\.co\.za.*"),
    ("standard-bank-scantopay", r"SK-[0-9]{1,}-[0-9]{23}"),
    ("transactionjunction", r".*transactionjunction\.co\.za.*"),
    ("servest-parking", r"CRSTPC-[0-9]+-[0-9]+-[0-9]+-[0-9]+-[0-9]+"),
    ("payat-generic", r".{2}/.{4}/.{20}"),
    ("scantopay-url", r".*(scantopay\.io).*"),
    ("scantopay-10-digits", r"^[0-9]{10}$"),
    ("snapscan", r".*(snapscan).*"),
];

/// The merchant table shipped with the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRegistry;

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrySource for BuiltinRegistry {
    fn load(&self) -> Result<MerchantRegistry> {
        CRYPTOQR_MERCHANTS
            .iter()
            .map(|(id, body)| cryptoqr_merchant(id, body))
            .collect()
    }
}

fn cryptoqr_merchant(id: &str, body: &str) -> Result<MerchantDefinition> {
    let body = narrow_dots(body);
    // Anchors stay outside the group so `^...$` bodies still anchor the whole payload.
    let pattern = match body.strip_prefix('^').and_then(|b| b.strip_suffix('$')) {
        Some(inner) => format!("(?i)^(?<identifier>{inner})$"),
        None => format!("(?i)(?<identifier>{body})"),
    };

    Ok(MerchantDefinition::new(id, &pattern, CRYPTOQR_DOMAIN)?
        .with_domain(Network::Mainnet, CRYPTOQR_DOMAIN)
        .with_domain(Network::Signet, CRYPTOQR_STAGING_DOMAIN)
        .with_domain(Network::Regtest, CRYPTOQR_STAGING_DOMAIN)
        .with_display_currency("ZAR"))
}

/// Replaces every unescaped `.` outside a character class with [`LINE_CHAR`].
fn narrow_dots(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            '.' if !in_class => out.push_str(LINE_CHAR),
            _ => out.push(c),
        }
    }
    out
}
