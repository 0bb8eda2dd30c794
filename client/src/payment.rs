/// UPI deep-link payment addressing.
///
/// The link itself is the payload a QR widget renders; generating it is all
/// the payment flow amounts to on this side. Settlement happens entirely in
/// whichever UPI app scans it.

/// Builds a `upi://pay` deep link for the given payee and amount.
pub fn upi_pay_link(upi_id: &str, payee_name: &str, amount: f64) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={:.2}&cu=INR",
        urlencoding::encode(upi_id),
        urlencoding::encode(payee_name),
        amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shape() {
        let link = upi_pay_link("ravi@upi", "Ravi", 100.0);
        assert_eq!(link, "upi://pay?pa=ravi%40upi&pn=Ravi&am=100.00&cu=INR");
    }

    #[test]
    fn test_encodes_spaces_and_amount_precision() {
        let link = upi_pay_link("ravi@upi", "Ravi Kumar", 83.3);
        assert!(link.contains("pn=Ravi%20Kumar"));
        assert!(link.contains("am=83.30"));
    }
}
