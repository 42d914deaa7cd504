pub mod config;

mod auth;
pub use auth::authenticate;

mod gateway;
pub use gateway::{CatalogStore, load_all};

mod notify;
pub use notify::{
    Embed, EmbedField, EmbedFooter, Webhook, WebhookClient, WebhookError, WebhookPayload,
    edit_request_payload,
};

mod publish;
pub use publish::{PublishError, PublishSession, SaveReleaseEndpoint};

mod session;
pub use session::{ERROR_RESET, EditSession, SUCCESS_RESET, SubmitError, SubmitStatus};

mod uploads;
pub use uploads::{ObjectStore, upload_new_release_assets, upload_pending};

use greenroom_supabase as gs;
