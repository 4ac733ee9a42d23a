use soroban_sdk::{Env, I256};

use crate::*;

mod ray {
    use super::*;

    #[test]
    fn mul_rounds_half_up() {
        let env = Env::default();

        assert_eq!(3i128.ray_mul(&env, RAY / 2).unwrap(), 2);
        assert_eq!(1i128.ray_mul(&env, RAY / 2).unwrap(), 1);
        assert_eq!(1i128.ray_mul(&env, RAY / 2 - 1).unwrap(), 0);
        assert_eq!(RAY.ray_mul(&env, RAY).unwrap(), RAY);
    }

    #[test]
    fn mul_floor_never_rounds_up() {
        let env = Env::default();

        assert_eq!(3i128.ray_mul_floor(&env, RAY / 2).unwrap(), 1);
        assert_eq!(999i128.ray_mul_floor(&env, RAY + RAY / 1000).unwrap(), 999);
        assert_eq!(1000i128.ray_mul_floor(&env, RAY + RAY / 1000).unwrap(), 1001);
    }

    #[test]
    fn mul_handles_products_wider_than_i128() {
        let env = Env::default();
        let rate = 10i128.pow(30);

        assert_eq!(rate.ray_mul(&env, rate).unwrap(), 10i128.pow(33));
    }

    #[test]
    fn mul_overflow() {
        let env = Env::default();

        assert_eq!(
            i128::MAX.ray_mul(&env, 2 * RAY),
            Err(Error::ArithmeticOverflow)
        );
    }

    #[test]
    fn mul_rejects_negative_operands() {
        let env = Env::default();

        assert_eq!((-1i128).ray_mul(&env, RAY), Err(Error::NegativeAmount));
    }

    #[test]
    fn div_rounds_half_up() {
        let env = Env::default();

        assert_eq!(1i128.ray_div(&env, 3).unwrap(), RAY / 3);
        assert_eq!(10i128.ray_div(&env, 3 * RAY).unwrap(), 3);
        assert_eq!(1i128.ray_div(&env, 2 * RAY).unwrap(), 1);
        assert_eq!(1i128.ray_div(&env, 3 * RAY).unwrap(), 0);
    }

    #[test]
    fn div_by_zero() {
        let env = Env::default();

        assert_eq!(RAY.ray_div(&env, 0), Err(Error::DivisionByZero));
        assert_eq!(0i128.ray_div(&env, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_overflow() {
        let env = Env::default();

        assert_eq!(i128::MAX.ray_div(&env, 1), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn mul_then_div_restores_value_within_one_unit() {
        let env = Env::default();

        let values = [1i128, 7, 1_000_000, 123_456_789_012_345, 10i128.pow(20)];
        let factors = [
            RAY,
            RAY / 3,
            RAY + 1,
            1_051_265_681_539_063_650_421_944_000,
            7 * RAY,
            10i128.pow(30),
        ];

        for a in values {
            for b in factors {
                let restored = a.ray_mul(&env, b).unwrap().ray_div(&env, b).unwrap();
                assert!((restored - a).abs() <= 1, "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn weighted_average_of_rates() {
        let env = Env::default();

        assert_eq!(
            weighted_average(&env, &[(RAY, 2), (10i128.pow(30), 1)]).unwrap(),
            334 * RAY
        );
        assert_eq!(weighted_average(&env, &[(5 * RAY / 100, 10)]).unwrap(), 5 * RAY / 100);
        assert_eq!(
            weighted_average(&env, &[(RAY, 0), (0, 0)]),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn weighted_average_rounds_each_term() {
        let env = Env::default();

        // 1 * 1 / WAD rounds to zero before the division by the total weight
        assert_eq!(rate_weight(&env, 1, 1).unwrap(), I256::from_i32(&env, 0));
        assert_eq!(weighted_average(&env, &[(1, 1), (0, 1)]).unwrap(), 0);
        // 3 * WAD / 2 rounds half up to 2
        assert_eq!(
            rate_weight(&env, 3, HALF_WAD).unwrap(),
            I256::from_i32(&env, 2)
        );
        // 2 * WAD / WAD
        assert_eq!(weighted_average(&env, &[(3, HALF_WAD), (0, HALF_WAD)]).unwrap(), 2);
        assert_eq!(
            rate_from_weight(&env, &I256::from_i32(&env, 1), 3 * WAD).unwrap(),
            0
        );
        assert_eq!(rate_weight(&env, -1, 1), Err(Error::NegativeAmount));
    }
}

mod interest {
    use super::*;

    const DAY: u64 = 86_400;

    #[test]
    fn no_time_no_interest() {
        let env = Env::default();

        assert_eq!(compounded_interest(&env, 10i128.pow(30), 0).unwrap(), RAY);
        assert_eq!(linear_interest(10i128.pow(30), 0).unwrap(), RAY);
    }

    #[test]
    fn compounded_matches_third_order_expansion() {
        let env = Env::default();

        assert_eq!(
            compounded_interest(&env, RAY, SECONDS_PER_YEAR).unwrap(),
            2_666_663_803_286_306_996_604_104_000
        );
        assert_eq!(
            compounded_interest(&env, 5 * RAY / 100, SECONDS_PER_YEAR).unwrap(),
            1_051_265_681_539_063_650_421_944_000
        );
        assert_eq!(
            compounded_interest(&env, 5 * RAY / 100, DAY).unwrap(),
            1_000_136_995_684_207_123_907_444_230
        );
        assert_eq!(
            compounded_interest(&env, 334 * RAY, SECONDS_PER_YEAR).unwrap(),
            6_266_063_074_147_066_960_565_420_551_448_000
        );
    }

    #[test]
    fn short_periods_skip_higher_terms() {
        let env = Env::default();
        let rate = 10i128.pow(30);

        assert_eq!(
            compounded_interest(&env, rate, 1).unwrap(),
            linear_interest(rate, 1).unwrap()
        );
        assert_eq!(
            compounded_interest(&env, rate, 2).unwrap(),
            1_000_063_420_589_478_436_826_629_455
        );
    }

    #[test]
    fn compounding_outgrows_simple_interest() {
        let env = Env::default();
        let rate = 5 * RAY / 100;

        let linear = linear_interest(rate, DAY).unwrap();
        let compounded = compounded_interest(&env, rate, DAY).unwrap();

        assert_eq!(linear, 1_000_136_986_301_369_863_013_698_630);
        assert!(compounded > linear);
    }

    #[test]
    fn interest_between_timestamps() {
        let env = Env::default();
        let rate = 5 * RAY / 100;

        assert_eq!(
            compounded_interest_between(&env, rate, 10 * DAY, 11 * DAY).unwrap(),
            compounded_interest(&env, rate, DAY).unwrap()
        );
        assert_eq!(
            compounded_interest_between(&env, rate, 11 * DAY, 10 * DAY).unwrap(),
            RAY
        );
    }

    #[test]
    fn period_longer_than_max_is_rejected() {
        let env = Env::default();
        let rate = 10i128.pow(32);

        assert_eq!(
            compounded_interest(&env, rate, u64::MAX),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(
            compounded_interest(&env, rate, MAX_COMPOUNDING_PERIOD + 1),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(
            compounded_interest_between(&env, rate, 0, u64::MAX),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(compounded_interest(&env, 0, u64::MAX).unwrap(), RAY);
        assert!(compounded_interest(&env, RAY, MAX_COMPOUNDING_PERIOD).unwrap() > RAY);
    }

    #[test]
    fn negative_rate() {
        let env = Env::default();

        assert_eq!(compounded_interest(&env, -1, DAY), Err(Error::InvalidRate));
        assert_eq!(linear_interest(-1, DAY), Err(Error::InvalidRate));
    }
}

mod percentage_math {
    use super::*;

    #[test]
    fn percent_mul() {
        assert_eq!(1000i128.percent_mul(500).unwrap(), 50);
        assert_eq!(RAY.percent_mul(PERCENTAGE_FACTOR).unwrap(), RAY);
        assert_eq!(1i128.percent_mul(5_000).unwrap(), 1);
        assert_eq!(0i128.percent_mul(5_000).unwrap(), 0);
        assert_eq!(i128::MAX.percent_mul(2), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn percentage_bounds() {
        assert!(require_valid_percentage(PERCENTAGE_FACTOR).is_ok());
        assert_eq!(
            require_valid_percentage(PERCENTAGE_FACTOR + 1),
            Err(Error::InvalidReserveFactor)
        );
    }
}
