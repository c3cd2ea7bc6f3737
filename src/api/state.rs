// Shared state handed to every handler.
//
// Integrations are optional: a missing credential leaves the slot empty and
// the matching route answers 500 instead of the server refusing to start.

use crate::core::livekit::{LivekitService, TokenSigner};
use crate::core::moderation::TextModerator;
use crate::core::payments::{CheckoutClient, PaymentsService};

pub type DynLivekitService = LivekitService<Box<dyn TokenSigner>>;
pub type DynPaymentsService = PaymentsService<Box<dyn CheckoutClient>>;

pub struct AppState {
    pub moderator: TextModerator,
    pub livekit: Option<DynLivekitService>,
    pub payments: Option<DynPaymentsService>,
}
