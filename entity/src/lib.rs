pub mod scrum_scrum_user;
pub mod scrum_scrum_user_token;

/*
 A user logs in once per client type and keeps one token per (user, client).
 Web tokens expire after TOKEN_EXPIRATION_DAYS, mobile tokens do not.
 Logging in again hands back the same key with a fresh created_on.
 */
