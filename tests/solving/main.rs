#[cfg(test)]
mod verify {
    use texdsl::solver::{self, Input, Solver};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn both_winds() {
        let solver = Solver::new(Input {
            x: 5.0,
            y: 5.0,
            v_max: 3.0,
            first_wind_time: 2.0,
            ux: -1.0,
            uy: -1.0,
            wx: -1.0,
            wy: 0.0,
        });
        assert_close(solver.solve(), 3.729935587093555327);
    }

    #[test]
    fn only_one_wind() {
        let solver = Solver::new(Input {
            x: 0.0,
            y: 1000.0,
            v_max: 100.0,
            first_wind_time: 1000.0,
            ux: -50.0,
            uy: 0.0,
            wx: 50.0,
            wy: 0.0,
        });
        assert_close(solver.solve(), 11.547005383792516398);
    }

    #[test]
    fn zero_answer() {
        let solver = Solver::new(Input {
            x: 0.0,
            y: 0.0,
            v_max: 10.0,
            first_wind_time: 100.0,
            ux: 5.0,
            uy: 0.0,
            wx: 0.0,
            wy: 0.0,
        });
        assert_close(solver.solve(), 0.0);
    }

    #[test]
    fn big_input() {
        let solver = Solver::new(Input {
            x: -20000.0,
            y: 20000.0,
            v_max: 1000.0,
            first_wind_time: 999.0,
            ux: 0.0,
            uy: -999.0,
            wx: 999.0,
            wy: 0.0,
        });
        assert_close(solver.solve(), 1018.7770495642339483);
    }

    #[test]
    fn reading_from_input() {
        let input = solver::read("0 0 5 5\n3 2\n-1 -1\n-1 0\n".as_bytes()).unwrap();
        assert_close(Solver::new(input).solve(), 3.729935587093555327);
    }
}
