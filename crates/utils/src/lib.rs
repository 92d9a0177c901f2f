use rand::Rng;

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    let random_secret: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect();
    random_secret
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generates_secret_of_given_length() {
        for len in [1, 16, 64].iter() {
            assert_eq!(create_random_secret(*len).len(), *len);
        }
    }
}
