#[cfg(test)]
mod tests {
    use crate::resolver::*;
    use crate::settings::SceneColor;
    use crate::weather_state::{Environment, TimeOfDay};

    use Environment::{Clear, Cloudy, Rainy, Snowy};
    use TimeOfDay::{Afternoon, Evening, Morning, Night};

    const WHITE: u32 = 0xffffff;
    const DARK: u32 = 0x333333;
    const GRAY: u32 = 0xaaaaaa;

    /// (env, time, count, precip colour, size, velocity, opacity, clouds, sky, tint)
    type Row = (Environment, TimeOfDay, u32, u32, f32, f32, f32, u32, u32, u32);

    #[rustfmt::skip]
    const GOLDEN: [Row; 16] = [
        (Clear,  Morning,   0,      GRAY,  0.1, 3.0, 0.3, 10, 0xf6c6a8, 0xffe8dc),
        (Clear,  Afternoon, 0,      GRAY,  0.1, 3.0, 0.3, 10, 0x87ceeb, 0xffffff),
        (Clear,  Evening,   0,      GRAY,  0.1, 3.0, 0.3, 10, 0xf08a5d, 0xffc2a1),
        (Clear,  Night,     500,    WHITE, 0.1, 0.0, 0.3, 10, 0x0b1026, 0x3a3f5c),
        (Cloudy, Morning,   0,      GRAY,  0.1, 3.0, 1.0, 15, 0xf6c6a8, 0xffe8dc),
        (Cloudy, Afternoon, 0,      GRAY,  0.1, 3.0, 1.0, 30, 0x87ceeb, 0xffffff),
        (Cloudy, Evening,   0,      GRAY,  0.1, 3.0, 1.0, 30, 0xf08a5d, 0xffc2a1),
        (Cloudy, Night,     0,      DARK,  0.1, 3.0, 1.0, 30, 0x0b1026, 0x3a3f5c),
        (Rainy,  Morning,   10_000, GRAY,  0.1, 3.0, 1.0, 40, 0x3a3a3a, 0x5a5a5a),
        (Rainy,  Afternoon, 10_000, WHITE, 0.1, 3.0, 1.0, 40, 0x808080, 0x9a9a9a),
        (Rainy,  Evening,   10_000, GRAY,  0.1, 3.0, 1.0, 40, 0x3a3a3a, 0x5a5a5a),
        (Rainy,  Night,     10_000, DARK,  0.1, 3.0, 1.0, 40, 0x0a0a0f, 0x202024),
        (Snowy,  Morning,   10_000, GRAY,  1.0, 0.5, 1.0, 20, 0x3a3a3a, 0x5a5a5a),
        (Snowy,  Afternoon, 10_000, GRAY,  1.0, 0.5, 1.0, 20, 0x808080, 0x9a9a9a),
        (Snowy,  Evening,   10_000, GRAY,  1.0, 0.5, 1.0, 20, 0x3a3a3a, 0x5a5a5a),
        (Snowy,  Night,     10_000, DARK,  1.0, 0.5, 1.0, 20, 0x0a0a0f, 0x202024),
    ];

    #[test]
    fn test_golden_table_all_pairs() {
        for (env, time, count, precip, size, velocity, opacity, clouds, sky, tint) in GOLDEN {
            let s = resolve(Some(env), Some(time));
            let label = format!("{}+{}", env.name(), time.name());
            assert_eq!(s.precipitation_count, count, "{label}: precipitation count");
            assert_eq!(s.precipitation_color, SceneColor(precip), "{label}: precip colour");
            assert_eq!(s.precipitation_size, size, "{label}: precipitation size");
            assert_eq!(s.fall_velocity, Some(velocity), "{label}: fall velocity");
            assert_eq!(s.cloud_opacity, opacity, "{label}: cloud opacity");
            assert_eq!(s.cloud_count, clouds, "{label}: cloud count");
            assert_eq!(s.sky_color, SceneColor(sky), "{label}: sky colour");
            assert_eq!(s.cloud_tint, SceneColor(tint), "{label}: cloud tint");
        }
    }

    #[test]
    fn test_every_pair_validates() {
        for env in Environment::ALL {
            for time in TimeOfDay::ALL {
                let s = resolve(Some(env), Some(time));
                assert_eq!(s.validate(), Ok(()), "{}+{}", env.name(), time.name());
            }
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        for env in Environment::ALL {
            for time in TimeOfDay::ALL {
                assert_eq!(resolve(Some(env), Some(time)), resolve(Some(env), Some(time)));
            }
        }
        assert_eq!(resolve(None, None), resolve(None, None));
    }

    #[test]
    fn test_rainy_afternoon_scenario() {
        let s = resolve(Some(Rainy), Some(Afternoon));
        assert_eq!(s.precipitation_count, 10_000);
        assert_eq!(s.precipitation_color, SceneColor(WHITE));
        assert_eq!(s.sky_color, SceneColor(0x808080));
        assert_eq!(s.cloud_count, 40);
    }

    #[test]
    fn test_clear_night_scenario() {
        let s = resolve(Some(Clear), Some(Night));
        assert_eq!(s.precipitation_count, 500);
        assert_eq!(s.precipitation_color, SceneColor(WHITE));
        assert_eq!(s.fall_velocity, Some(0.0));
        assert_eq!(s.cloud_count, 10);
    }

    #[test]
    fn test_unset_environment_defaults() {
        let s = resolve(None, Some(Afternoon));
        assert_eq!(s.precipitation_count, 500);
        assert_eq!(s.precipitation_color, SceneColor(GRAY));
        assert_eq!(s.precipitation_size, 0.1);
        assert_eq!(s.fall_velocity, Some(3.0));
        assert_eq!(s.cloud_opacity, 1.0);
        assert_eq!(s.cloud_count, 25);
        assert_eq!(s.sky_color, SceneColor(0x87ceeb));
    }

    #[test]
    fn test_unset_environment_at_night_is_dark_precipitation() {
        let s = resolve(None, Some(Night));
        assert_eq!(s.precipitation_color, SceneColor(DARK));
    }

    #[test]
    fn test_unset_time_defaults() {
        let s = resolve(Some(Cloudy), None);
        assert_eq!(s.cloud_count, 30);
        assert_eq!(s.sky_color, SceneColor(0x11111f));
        assert_eq!(s.cloud_tint, SceneColor(0xffffff));
        assert_eq!(s.ambient_light_intensity, 1.0);
        assert_eq!(s.directional_light_intensity, 0.5);
        assert!(!s.bloom);

        let storm = resolve(Some(Snowy), None);
        assert_eq!(storm.sky_color, SceneColor(0x3a3a3a));
        assert_eq!(storm.cloud_tint, SceneColor(0x5a5a5a));
    }

    #[test]
    fn test_both_unset_is_total() {
        let s = resolve(None, None);
        assert_eq!(s.precipitation_count, 500);
        assert_eq!(s.cloud_count, 25);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_lighting_depends_on_time_only() {
        for time in TimeOfDay::ALL {
            let reference = resolve(Some(Clear), Some(time));
            for env in Environment::ALL {
                let s = resolve(Some(env), Some(time));
                assert_eq!(s.ambient_light_intensity, reference.ambient_light_intensity);
                assert_eq!(
                    s.directional_light_intensity,
                    reference.directional_light_intensity
                );
            }
        }
        let morning = resolve(Some(Rainy), Some(Morning));
        let evening = resolve(Some(Rainy), Some(Evening));
        assert!(morning.ambient_light_intensity < evening.ambient_light_intensity);
        assert!(morning.directional_light_intensity < evening.directional_light_intensity);
    }

    #[test]
    fn test_bloom_and_moon_follow_night() {
        assert!(resolve(Some(Clear), Some(Night)).moon_visible);
        assert!(resolve(Some(Cloudy), Some(Night)).moon_visible);
        assert!(!resolve(Some(Rainy), Some(Night)).moon_visible);
        assert!(!resolve(Some(Clear), Some(Evening)).moon_visible);
        assert!(resolve(Some(Snowy), Some(Night)).bloom);
        assert!(!resolve(Some(Snowy), Some(Morning)).bloom);
    }

    #[test]
    fn test_static_scene_constants() {
        let s = resolve(Some(Rainy), Some(Night));
        assert_eq!(s.fog_density, 0.002);
        assert_eq!(s.camera_position, [0.0, 0.0, 1.0]);
        assert_eq!(s.camera_rotation, [1.16, -0.12, 0.27]);
        assert_eq!(s.flash_color, SceneColor(0x062d89));
        assert_eq!(s.flash_intensity, 30.0);
        assert_eq!(s.flash_distance, 500.0);
        assert_eq!(s.flash_decay, 1.7);
    }
}
