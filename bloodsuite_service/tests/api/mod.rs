mod test_auth;
mod test_health;
mod test_notifications;
mod test_requests;
