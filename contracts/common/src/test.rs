use soroban_sdk::Env;

use crate::{bps_div, bps_mul, mul_div_floor, FixedI128, PERCENTAGE_FACTOR};

mod fixedi128 {

    use super::*;

    #[test]
    fn percent_mul() {
        let percent = 500; // 5%
        let value = 1000;
        assert_eq!(
            FixedI128::from_rational(percent, PERCENTAGE_FACTOR)
                .unwrap()
                .mul_int(value)
                .unwrap(),
            50
        );
    }

    #[test]
    fn from_inner() {
        let inner = FixedI128::DENOMINATOR;
        assert_eq!(FixedI128::from_inner(inner), FixedI128::ONE);
    }

    #[test]
    fn from_rational() {
        let fixed = FixedI128::from_rational(1, 2).unwrap();
        assert_eq!(fixed.into_inner(), 500_000_000_000_000_000);
    }

    #[test]
    fn from_percentage() {
        let fixed = FixedI128::from_percentage(10_500).unwrap();
        assert_eq!(fixed.into_inner(), 1_050_000_000_000_000_000);
    }

    #[test]
    fn from_decimals() {
        // 3000 USD reported with 8 decimals
        let fixed = FixedI128::from_decimals(3_000_00000000, 8).unwrap();
        assert_eq!(fixed, FixedI128::from_int(3000).unwrap());

        // 1 USD reported with 20 decimals
        let fixed = FixedI128::from_decimals(100_000_000_000_000_000_000, 20).unwrap();
        assert_eq!(fixed, FixedI128::ONE);

        let fixed = FixedI128::from_decimals(42, 18).unwrap();
        assert_eq!(fixed.into_inner(), 42);

        // normalizing an already normalized value is stable
        let once = FixedI128::from_decimals(123_456_789, 6).unwrap();
        let twice = FixedI128::from_decimals(once.into_inner(), 18).unwrap();
        assert_eq!(once, twice);

        assert_eq!(FixedI128::from_decimals(i128::MAX, 0), None);
    }

    #[test]
    fn mul() {
        let two = FixedI128::from_int(2).unwrap();
        let product = two.checked_mul(two).unwrap();
        assert_eq!(product, FixedI128::from_int(4).unwrap());
        assert_eq!(product.into_inner(), 4 * FixedI128::DENOMINATOR);
    }

    #[test]
    fn div() {
        let four = FixedI128::from_int(4).unwrap();
        let two = FixedI128::from_int(2).unwrap();

        assert_eq!(four.checked_div(two).unwrap(), two);
        assert_eq!(
            FixedI128::ONE.checked_div(four).unwrap(),
            FixedI128::from_rational(1, 4).unwrap()
        );
    }

    #[test]
    fn add_sub() {
        let quarter = FixedI128::from_rational(1, 4).unwrap();
        let half = FixedI128::from_rational(1, 2).unwrap();

        assert_eq!(quarter.checked_add(quarter).unwrap(), half);
        assert_eq!(FixedI128::ONE.checked_sub(half).unwrap(), half);
    }

    #[test]
    fn mul_int() {
        let quarter = FixedI128::from_rational(1, 4).unwrap();

        assert_eq!(quarter.mul_int(1000).unwrap(), 250);
        assert_eq!(quarter.mul_int(i128::MAX), None);
    }

    #[test]
    fn min() {
        let half = FixedI128::from_rational(1, 2).unwrap();
        assert_eq!(half.min(FixedI128::ONE), half);
        assert_eq!(FixedI128::ONE.min(half), half);
    }
}

mod math {
    use super::*;

    #[test]
    fn mul_div_fits_i128() {
        let env = Env::default();

        assert_eq!(mul_div_floor(&env, 10, 3, 4), Some(7));
        assert_eq!(mul_div_floor(&env, 10, 3, 0), None);
    }

    #[test]
    fn mul_div_widens_on_overflow() {
        let env = Env::default();

        // 24_000 USD weighted collateral over 22_000 USD debt, both 18 decimals
        let weighted = 24_000 * FixedI128::DENOMINATOR;
        let debt = 22_000 * FixedI128::DENOMINATOR;
        let health = mul_div_floor(&env, weighted, FixedI128::DENOMINATOR, debt).unwrap();

        assert_eq!(health, 1_090_909_090_909_090_909);
    }

    #[test]
    fn mul_div_result_overflow() {
        let env = Env::default();

        assert_eq!(mul_div_floor(&env, i128::MAX, i128::MAX, 1), None);
    }

    #[test]
    fn bps_mul_rounds_half_up() {
        assert_eq!(bps_mul(1_000, 7_500), Some(750));
        // 0.5 rounds up, 0.4999 down
        assert_eq!(bps_mul(1, 5_000), Some(1));
        assert_eq!(bps_mul(1, 4_999), Some(0));
        assert_eq!(bps_mul(0, 5_000), Some(0));
        assert_eq!(bps_mul(i128::MAX, 5_000), None);
    }

    #[test]
    fn bps_div_inverts_bonus() {
        // collateral worth 10_500 covers 10_000 of debt at a 5% bonus
        assert_eq!(bps_div(10_500, PERCENTAGE_FACTOR + 500), Some(10_000));
        assert_eq!(bps_div(750, 7_500), Some(1_000));
        assert_eq!(bps_div(750, 0), None);
        assert_eq!(bps_div(i128::MAX, 5_000), None);
    }
}
