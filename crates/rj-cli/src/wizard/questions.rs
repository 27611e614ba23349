//! Question and message text shown by the wizard.

pub const HAS_SAMPLE_JWT: &str = "Do you have a sample JWT?";
pub const ENTER_SAMPLE_JWT: &str = "Enter sample JWT here:";
pub const CHOOSE_ALGORITHM: &str = "What algorithm do you use to sign your tokens?";
pub const HAS_JWKS_ENDPOINT: &str = "Do you have the JWKS endpoint that can validate your token? If you do not have a JWKS endpoint, enter no.";
pub const ENTER_JWKS_ENDPOINT: &str = "Enter JWKS endpoint here:";
pub const HAS_SIGNING_KEY: &str = "Do you have the signing key available?";
pub const ENTER_SIGNING_KEY: &str = "Please provide the signing key here.";
pub const IS_KEY_BASE64: &str = "Is the key base64 encoded?";

pub const HOSTED_VS_LOCAL_ADVICE: &str = "In the router, you'll be given an option to either use a local file or hosted JWKS. For asymmetric key signing, we'd recommend using a hosted JWKS, such as those provided by IdPs such as Auth0 or Okta. For symmetric tokens, we'd recommend a local file which can be crafted with this tool. To do so, select no and have the signing key available to paste.";
pub const NO_KEY_ID: &str = "No key ID identified, will omit 'kid' from resulting JWKS file.";
