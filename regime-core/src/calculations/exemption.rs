//! Housing-rent allowance (HRA) exemption.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Locality;
use crate::calculations::common::max;

/// Share of salary that the exemption may not exceed in a metro city.
pub const METRO_SALARY_SHARE: Decimal = dec!(0.50);

/// Share of salary that the exemption may not exceed elsewhere.
pub const NON_METRO_SALARY_SHARE: Decimal = dec!(0.40);

/// Rent up to this share of salary is never exempt.
pub const RENT_SALARY_OFFSET: Decimal = dec!(0.10);

pub fn locality_salary_share(locality: Locality) -> Decimal {
    match locality {
        Locality::Metro => METRO_SALARY_SHARE,
        Locality::NonMetro => NON_METRO_SALARY_SHARE,
    }
}

/// Exempt portion of the rent allowance.
///
/// The smallest of the allowance received, rent paid in excess of 10% of
/// salary, and the locality share of salary; floored at zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::Locality;
/// use regime_core::calculations::compute_housing_exemption;
///
/// let exemption = compute_housing_exemption(
///     dec!(1200000), // salary
///     dec!(200000),  // allowance received
///     dec!(180000),  // rent paid
///     Locality::Metro,
/// );
///
/// // min(200000, 180000 - 120000, 600000)
/// assert_eq!(exemption, dec!(60000));
/// ```
pub fn compute_housing_exemption(
    salary: Decimal,
    rent_allowance: Decimal,
    rent_paid: Decimal,
    locality: Locality,
) -> Decimal {
    let excess_rent = rent_paid - salary * RENT_SALARY_OFFSET;
    let salary_cap = salary * locality_salary_share(locality);

    max(rent_allowance.min(excess_rent).min(salary_cap), Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn excess_rent_is_the_binding_limit() {
        let result =
            compute_housing_exemption(dec!(1200000), dec!(200000), dec!(180000), Locality::Metro);

        assert_eq!(result, dec!(60000));
    }

    #[test]
    fn allowance_received_is_the_binding_limit() {
        let result =
            compute_housing_exemption(dec!(1000000), dec!(50000), dec!(400000), Locality::Metro);

        assert_eq!(result, dec!(50000));
    }

    #[test]
    fn metro_salary_share_is_the_binding_limit() {
        // excess rent 1,100,000; allowance 900,000; 50% of salary 500,000
        let result =
            compute_housing_exemption(dec!(1000000), dec!(900000), dec!(1200000), Locality::Metro);

        assert_eq!(result, dec!(500000));
    }

    #[test]
    fn non_metro_uses_forty_percent_of_salary() {
        let result = compute_housing_exemption(
            dec!(1000000),
            dec!(900000),
            dec!(1200000),
            Locality::NonMetro,
        );

        assert_eq!(result, dec!(400000));
    }

    #[test]
    fn rent_below_ten_percent_of_salary_is_floored_at_zero() {
        let result =
            compute_housing_exemption(dec!(1200000), dec!(200000), dec!(100000), Locality::Metro);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn no_rent_paid_means_no_exemption() {
        let result =
            compute_housing_exemption(dec!(800000), dec!(150000), Decimal::ZERO, Locality::NonMetro);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn no_allowance_means_no_exemption() {
        let result =
            compute_housing_exemption(dec!(800000), Decimal::ZERO, dec!(240000), Locality::Metro);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn locality_salary_share_values() {
        assert_eq!(locality_salary_share(Locality::Metro), dec!(0.50));
        assert_eq!(locality_salary_share(Locality::NonMetro), dec!(0.40));
    }
}
