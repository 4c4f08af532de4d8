use super::MessageId;

#[test]
fn request_flag_is_carried_in_the_top_bit() {
  let plain = MessageId::of(42);
  assert!(!plain.is_request());
  assert_eq!(plain.integer_value(), 42);

  let request = MessageId::request(42);
  assert!(request.is_request());
  assert_ne!(request.integer_value(), 42);
}

#[test]
fn default_id_is_an_asynchronous_send() {
  assert!(!MessageId::default().is_request());
  assert_eq!(MessageId::default(), MessageId::of(0));
}
