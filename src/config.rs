use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the persisted cart file.
    pub cart_data_dir: PathBuf,
    pub telegram: Option<TelegramConfig>,
    pub email: Option<EmailConfig>,
    pub airtable: Option<AirtableConfig>,
    pub exchange_rate_api_key: Option<String>,
    pub nowpayments_api_key: Option<String>,
    pub payment_addresses: PaymentAddresses,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
}

/// Static crypto receiving addresses. Informational only; no signing or
/// validation happens anywhere in this service.
#[derive(Debug, Clone)]
pub struct PaymentAddresses {
    pub bitcoin: String,
    pub ethereum: String,
}

impl Default for PaymentAddresses {
    fn default() -> Self {
        Self {
            bitcoin: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            ethereum: "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cart_data_dir = env::var("CART_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let telegram = match (env::var("TELEGRAM_BOT_TOKEN"), env::var("TELEGRAM_CHAT_ID")) {
            (Ok(bot_token), Ok(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        let email = match (env::var("EMAIL_USER"), env::var("EMAIL_PASSWORD")) {
            (Ok(user), Ok(password)) => Some(EmailConfig {
                host: env::var("EMAIL_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                port: env::var("EMAIL_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(587),
                user,
                password,
            }),
            _ => None,
        };

        let airtable = match (env::var("AIRTABLE_API_KEY"), env::var("AIRTABLE_BASE_ID")) {
            (Ok(api_key), Ok(base_id)) => Some(AirtableConfig { api_key, base_id }),
            _ => None,
        };

        let defaults = PaymentAddresses::default();
        let payment_addresses = PaymentAddresses {
            bitcoin: env::var("BITCOIN_ADDRESS").unwrap_or(defaults.bitcoin),
            ethereum: env::var("ETHEREUM_ADDRESS").unwrap_or(defaults.ethereum),
        };

        Ok(Self {
            host,
            port,
            cart_data_dir,
            telegram,
            email,
            airtable,
            exchange_rate_api_key: env::var("EXCHANGE_RATE_API_KEY").ok(),
            nowpayments_api_key: env::var("NOWPAYMENTS_API_KEY").ok(),
            payment_addresses,
        })
    }
}
